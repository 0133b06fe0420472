use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::{NamedRef, RecordStatus};
use crate::models::subjects::entities::SubjectSummary;
use crate::models::teachers::entities::TeacherSummary;
use crate::models::timetables::entities::TimetableSlot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 容量
    pub capacity: i32,
    pub status: RecordStatus,
    pub class_group_id: i64,
    pub campus_id: i64,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 班级详情
///
/// 关联实体只展开一层，均为扁平摘要。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub class_group: NamedRef,
    pub campus: NamedRef,
    pub building: Option<NamedRef>,
    pub room: Option<NamedRef>,
    pub teachers: Vec<TeacherSummary>,
    pub subjects: Vec<SubjectSummary>,
    pub student_count: i64,
    pub timetable: Vec<TimetableSlot>,
}
