use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 科目摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectSummary {
    pub id: i64,
    pub name: String,
    pub code: String,
}

impl From<&Subject> for SubjectSummary {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name.clone(),
            code: subject.code.clone(),
        }
    }
}
