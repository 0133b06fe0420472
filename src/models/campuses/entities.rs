use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordStatus;

// 校区
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct Campus {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教学楼
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct Building {
    pub id: i64,
    pub campus_id: i64,
    pub name: String,
    pub code: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 教室
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campus.ts")]
pub struct Room {
    pub id: i64,
    pub building_id: i64,
    pub name: String,
    pub capacity: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
