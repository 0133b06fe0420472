use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::common::RecordStatus;
use crate::utils::validate::require_non_empty;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateSubjectRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("code", &self.code)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub id: i64,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub status: Option<RecordStatus>,
}

impl UpdateSubjectRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(code) = &self.code {
            require_non_empty("code", code)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
}
