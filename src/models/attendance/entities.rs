use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::string_enum;

// 考勤状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

string_enum!(AttendanceStatus {
    Present => "present",
    Absent => "absent",
    Late => "late",
    Excused => "excused",
});

impl AttendanceStatus {
    /// 是否计为出勤
    pub fn counts_as_present(&self, late_counts_as_present: bool) -> bool {
        match self {
            AttendanceStatus::Present => true,
            AttendanceStatus::Late => late_counts_as_present,
            AttendanceStatus::Absent | AttendanceStatus::Excused => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
