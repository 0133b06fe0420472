use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::models::common::RecordStatus;
use crate::utils::validate::{require_non_empty, validate_email};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("student_number", &self.student_number)?;
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)?;
        if let Some(email) = &self.email {
            validate_email(email).map_err(DashboardError::validation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<RecordStatus>,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(first_name) = &self.first_name {
            require_non_empty("first_name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require_non_empty("last_name", last_name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email).map_err(DashboardError::validation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
}
