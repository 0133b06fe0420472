use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordStatus;
use crate::string_enum;

// 教师类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub enum TeacherType {
    #[default]
    FullTime,
    PartTime,
    Substitute,
    Contract,
}

string_enum!(TeacherType {
    FullTime => "full_time",
    PartTime => "part_time",
    Substitute => "substitute",
    Contract => "contract",
});

// 教师扩展资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherProfile {
    pub teacher_type: TeacherType,
    pub specialization: Option<String>,
    pub subject_ids: Vec<i64>,
    pub class_ids: Vec<i64>,
    pub campus_ids: Vec<i64>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: RecordStatus,
    pub profile: Option<TeacherProfile>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班级详情中的教师摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Teacher> for TeacherSummary {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            email: teacher.email.clone(),
        }
    }
}
