use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::common::RecordStatus;
use crate::utils::validate::require_non_empty;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct CreateClassGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateClassGroupRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct UpdateClassGroupRequest {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub campus_id: Option<i64>,
    pub status: Option<RecordStatus>,
}

impl UpdateClassGroupRequest {
    pub fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => require_non_empty("name", name),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_group.ts")]
pub struct ClassGroupListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
}
