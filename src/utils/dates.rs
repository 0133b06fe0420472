use chrono::{Datelike, NaiveDate};

/// 日期统一以 YYYY-MM-DD 文本入库
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// 学年：9 月及以后属于 "Y-(Y+1)"，否则属于 "(Y-1)-Y"
pub fn academic_year_for(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() >= 9 {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// 月份键，形如 "2025-03"
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_text_roundtrip() {
        assert_eq!(format_date(d(2025, 3, 7)), "2025-03-07");
        assert_eq!(parse_date("2025-03-07"), Some(d(2025, 3, 7)));
        assert_eq!(parse_date("07/03/2025"), None);
    }

    #[test]
    fn test_academic_year_boundary() {
        assert_eq!(academic_year_for(d(2025, 8, 31)), "2024-2025");
        assert_eq!(academic_year_for(d(2025, 9, 1)), "2025-2026");
        assert_eq!(academic_year_for(d(2026, 1, 15)), "2025-2026");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(d(2025, 11, 2)), "2025-11");
    }
}
