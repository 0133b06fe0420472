use std::collections::HashSet;

use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;
use crate::errors::{DashboardError, Result};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

// 按日登记一个班级的考勤
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

impl RecordAttendanceRequest {
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(DashboardError::validation(
                "At least one attendance entry is required",
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.student_id) {
                return Err(DashboardError::validation(format!(
                    "Duplicate attendance entry for student {}",
                    entry.student_id
                )));
            }
        }
        Ok(())
    }
}

// 考勤查询，日期区间均为闭区间
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQuery {
    pub class_id: i64,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

impl AttendanceQuery {
    pub fn for_class(class_id: i64) -> Self {
        Self {
            class_id,
            from: None,
            to: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(DashboardError::validation(
                "'from' must not be later than 'to'",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_students_rejected() {
        let req: RecordAttendanceRequest = serde_json::from_str(
            r#"{"class_id":1,"date":"2025-03-03","entries":[
                {"student_id":1,"status":"present"},
                {"student_id":1,"status":"absent"}
            ]}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_query_range() {
        let mut query = AttendanceQuery::for_class(1);
        assert!(query.validate().is_ok());
        query.from = chrono::NaiveDate::from_ymd_opt(2025, 3, 10);
        query.to = chrono::NaiveDate::from_ymd_opt(2025, 3, 1);
        assert!(query.validate().is_err());
    }
}
