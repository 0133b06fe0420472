use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordStatus;

// 班级组（同一培养方案下的若干班级）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub campus_id: Option<i64>,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
