//! 统计分析结果
//!
//! 每次调用都基于当前查询结果重新计算，不做缓存。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单日出勤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct DailyAttendance {
    pub date: chrono::NaiveDate,
    pub present: i64,
    pub total: i64,
    /// 出勤率（百分比）
    pub rate: f64,
}

// 出勤趋势，average_rate 为各日出勤率的平均值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct AttendanceTrend {
    pub class_id: i64,
    pub days: Vec<DailyAttendance>,
    pub average_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct SubjectPerformance {
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub submission_count: i64,
    /// 各次提交得分百分比的平均值
    pub average_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct PerformanceReport {
    pub class_id: i64,
    pub subjects: Vec<SubjectPerformance>,
}

// 按月汇总的快照，period 形如 "2025-03"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct PeriodSnapshot {
    pub period: String,
    /// 当月有考勤记录的学生数
    pub active_students: i64,
    /// 当月各日出勤率的平均值，无考勤时为空
    pub attendance_rate: Option<f64>,
    pub average_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct HistoricalGrowth {
    pub class_id: i64,
    pub periods: Vec<PeriodSnapshot>,
    /// 最早与最晚考勤记录的存在性比较，见 `presence_growth`
    pub student_growth: Option<f64>,
    /// 首末期间活跃学生数的变化百分比
    pub student_count_growth: Option<f64>,
    /// 首末期间出勤率之差（百分点）
    pub attendance_change: Option<f64>,
    /// 首末期间平均分之差（百分点）
    pub score_change: Option<f64>,
}
