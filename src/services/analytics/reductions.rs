//! 统计归约
//!
//! 全部为纯函数，输入为一次查询得到的记录，输出为统计结果。

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::activities::entities::ScoredSubmission;
use crate::models::analytics::{
    AttendanceTrend, DailyAttendance, HistoricalGrowth, PerformanceReport, PeriodSnapshot,
    SubjectPerformance,
};
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::subjects::entities::Subject;
use crate::utils::dates::month_key;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// 按日分组计算出勤率，整体平均为各日出勤率的平均值而非总体比例
pub fn attendance_trend(
    class_id: i64,
    records: &[AttendanceRecord],
    late_counts_as_present: bool,
) -> AttendanceTrend {
    let mut by_day: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
    for record in records {
        let (present, total) = by_day.entry(record.date).or_default();
        *total += 1;
        if record.status.counts_as_present(late_counts_as_present) {
            *present += 1;
        }
    }

    let rates: Vec<(NaiveDate, i64, i64, f64)> = by_day
        .into_iter()
        .map(|(date, (present, total))| (date, present, total, percentage(present, total)))
        .collect();

    let average_rate = mean(rates.iter().map(|r| r.3)).map(round2).unwrap_or(0.0);

    AttendanceTrend {
        class_id,
        days: rates
            .into_iter()
            .map(|(date, present, total, rate)| DailyAttendance {
                date,
                present,
                total,
                rate: round2(rate),
            })
            .collect(),
        average_rate,
    }
}

/// 按科目分组，取各次提交得分百分比的平均值
pub fn performance_by_subject(
    class_id: i64,
    submissions: &[ScoredSubmission],
    subjects: &[Subject],
) -> PerformanceReport {
    let names: HashMap<i64, &str> = subjects.iter().map(|s| (s.id, s.name.as_str())).collect();

    let mut by_subject: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for submission in submissions {
        by_subject
            .entry(submission.subject_id)
            .or_default()
            .push(submission.percentage());
    }

    let subjects = by_subject
        .into_iter()
        .map(|(subject_id, percentages)| SubjectPerformance {
            subject_id,
            subject_name: names.get(&subject_id).map(|n| n.to_string()),
            submission_count: percentages.len() as i64,
            average_percentage: mean(percentages).map(round2).unwrap_or(0.0),
        })
        .collect();

    PerformanceReport { class_id, subjects }
}

/// 学生增长：只比较最早与最晚两条考勤记录是否存在（存在记为 1），不比较人数
///
/// 有记录时恒为 0，无记录时为空；按人数计算的增长见 `student_count_growth`。
pub fn presence_growth(records: &[AttendanceRecord]) -> Option<f64> {
    let first = records.iter().min_by_key(|r| (r.date, r.id))?;
    let last = records.iter().max_by_key(|r| (r.date, r.id))?;
    let (first, last) = (i64::from(first.id != 0), i64::from(last.id != 0));
    (first > 0).then(|| round2(percentage(last - first, first)))
}

/// 按月汇总活跃学生、出勤率与平均分，并比较首末两个月
pub fn historical_growth(
    class_id: i64,
    records: &[AttendanceRecord],
    submissions: &[ScoredSubmission],
    late_counts_as_present: bool,
) -> HistoricalGrowth {
    let mut attendance_by_month: BTreeMap<String, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        attendance_by_month
            .entry(month_key(record.date))
            .or_default()
            .push(record.clone());
    }

    let mut scores_by_month: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for submission in submissions {
        scores_by_month
            .entry(month_key(submission.submitted_at.date_naive()))
            .or_default()
            .push(submission.percentage());
    }

    let months: Vec<String> = attendance_by_month
        .keys()
        .chain(scores_by_month.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let periods: Vec<PeriodSnapshot> = months
        .into_iter()
        .map(|period| {
            let month_records = attendance_by_month.get(&period);
            let active_students = month_records
                .map(|rs| rs.iter().map(|r| r.student_id).collect::<HashSet<_>>().len() as i64)
                .unwrap_or(0);
            let attendance_rate = month_records
                .map(|rs| attendance_trend(class_id, rs, late_counts_as_present).average_rate);
            let average_score = scores_by_month
                .get(&period)
                .and_then(|scores| mean(scores.iter().copied()))
                .map(round2);

            PeriodSnapshot {
                period,
                active_students,
                attendance_rate,
                average_score,
            }
        })
        .collect();

    let (student_count_growth, attendance_change, score_change) = match (periods.first(), periods.last())
    {
        (Some(first), Some(last)) if periods.len() >= 2 => (
            (first.active_students > 0).then(|| {
                round2(percentage(
                    last.active_students - first.active_students,
                    first.active_students,
                ))
            }),
            first
                .attendance_rate
                .zip(last.attendance_rate)
                .map(|(a, b)| round2(b - a)),
            first
                .average_score
                .zip(last.average_score)
                .map(|(a, b)| round2(b - a)),
        ),
        _ => (None, None, None),
    };

    HistoricalGrowth {
        class_id,
        periods,
        student_growth: presence_growth(records),
        student_count_growth,
        attendance_change,
        score_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::common::RecordStatus;
    use chrono::{Datelike, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(student_id: i64, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: student_id * 1000 + i64::from(date.ordinal()),
            class_id: 1,
            student_id,
            date,
            status,
            remarks: None,
            recorded_at: Utc::now(),
        }
    }

    fn submission(subject_id: i64, score: f64, max_score: f64, month: u32) -> ScoredSubmission {
        ScoredSubmission {
            activity_id: 1,
            subject_id,
            student_id: 1,
            score,
            max_score,
            submitted_at: Utc.with_ymd_and_hms(2025, month, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_single_day_rate() {
        let day = date(2025, 3, 3);
        let records = vec![
            record(1, day, AttendanceStatus::Present),
            record(2, day, AttendanceStatus::Present),
            record(3, day, AttendanceStatus::Present),
            record(4, day, AttendanceStatus::Absent),
        ];
        let trend = attendance_trend(1, &records, true);
        assert_eq!(trend.days.len(), 1);
        assert_eq!(trend.days[0].present, 3);
        assert_eq!(trend.days[0].total, 4);
        assert_eq!(trend.days[0].rate, 75.0);
        assert_eq!(trend.average_rate, 75.0);
    }

    #[test]
    fn test_average_is_mean_of_daily_rates() {
        let monday = date(2025, 3, 3);
        let tuesday = date(2025, 3, 4);
        let records = vec![
            record(1, monday, AttendanceStatus::Present),
            record(2, monday, AttendanceStatus::Present),
            record(3, monday, AttendanceStatus::Present),
            record(4, monday, AttendanceStatus::Absent),
            record(1, tuesday, AttendanceStatus::Present),
            record(2, tuesday, AttendanceStatus::Absent),
        ];
        let trend = attendance_trend(1, &records, true);
        assert_eq!(trend.days[0].rate, 75.0);
        assert_eq!(trend.days[1].rate, 50.0);
        // 总体比例为 4/6，平均值取各日 (75 + 50) / 2
        assert_eq!(trend.average_rate, 62.5);
    }

    #[test]
    fn test_late_policy() {
        let day = date(2025, 3, 3);
        let records = vec![
            record(1, day, AttendanceStatus::Late),
            record(2, day, AttendanceStatus::Present),
        ];
        assert_eq!(attendance_trend(1, &records, true).average_rate, 100.0);
        assert_eq!(attendance_trend(1, &records, false).average_rate, 50.0);
    }

    #[test]
    fn test_empty_trend() {
        let trend = attendance_trend(1, &[], true);
        assert!(trend.days.is_empty());
        assert_eq!(trend.average_rate, 0.0);
    }

    #[test]
    fn test_performance_groups_by_subject() {
        let now = Utc::now();
        let subjects = vec![Subject {
            id: 10,
            name: "Maths".to_string(),
            code: "MATH".to_string(),
            description: None,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }];
        let submissions = vec![
            submission(10, 8.0, 10.0, 3),
            submission(10, 30.0, 50.0, 3),
            submission(20, 45.0, 50.0, 3),
        ];

        let report = performance_by_subject(1, &submissions, &subjects);
        assert_eq!(report.subjects.len(), 2);

        let maths = &report.subjects[0];
        assert_eq!(maths.subject_id, 10);
        assert_eq!(maths.subject_name.as_deref(), Some("Maths"));
        assert_eq!(maths.submission_count, 2);
        assert_eq!(maths.average_percentage, 70.0);

        let unknown = &report.subjects[1];
        assert_eq!(unknown.subject_name, None);
        assert_eq!(unknown.average_percentage, 90.0);
    }

    #[test]
    fn test_historical_growth_compares_first_and_last_month() {
        let records = vec![
            record(1, date(2025, 3, 3), AttendanceStatus::Present),
            record(2, date(2025, 3, 3), AttendanceStatus::Absent),
            record(1, date(2025, 4, 7), AttendanceStatus::Present),
            record(2, date(2025, 4, 7), AttendanceStatus::Present),
            record(3, date(2025, 4, 7), AttendanceStatus::Present),
        ];
        let submissions = vec![submission(10, 6.0, 10.0, 3), submission(10, 9.0, 10.0, 4)];

        let growth = historical_growth(1, &records, &submissions, true);
        assert_eq!(growth.periods.len(), 2);
        assert_eq!(growth.periods[0].period, "2025-03");
        assert_eq!(growth.periods[0].active_students, 2);
        assert_eq!(growth.periods[0].attendance_rate, Some(50.0));
        assert_eq!(growth.periods[1].active_students, 3);
        assert_eq!(growth.student_growth, Some(0.0));
        assert_eq!(growth.student_count_growth, Some(50.0));
        assert_eq!(growth.attendance_change, Some(50.0));
        assert_eq!(growth.score_change, Some(30.0));
    }

    #[test]
    fn test_historical_growth_needs_two_periods() {
        let records = vec![record(1, date(2025, 3, 3), AttendanceStatus::Present)];
        let growth = historical_growth(1, &records, &[], true);
        assert_eq!(growth.periods.len(), 1);
        assert_eq!(growth.student_growth, Some(0.0));
        assert_eq!(growth.student_count_growth, None);
        assert_eq!(growth.attendance_change, None);
        assert_eq!(growth.score_change, None);
    }

    #[test]
    fn test_presence_growth_ignores_headcount() {
        assert_eq!(presence_growth(&[]), None);

        let shrinking = vec![
            record(1, date(2025, 3, 3), AttendanceStatus::Present),
            record(2, date(2025, 3, 3), AttendanceStatus::Present),
            record(3, date(2025, 3, 3), AttendanceStatus::Present),
            record(1, date(2025, 6, 2), AttendanceStatus::Absent),
        ];
        assert_eq!(presence_growth(&shrinking), Some(0.0));
        let growth = historical_growth(1, &shrinking, &[], true);
        assert_eq!(growth.student_growth, Some(0.0));
        assert_eq!(growth.student_count_growth, Some(-66.67));
    }
}
