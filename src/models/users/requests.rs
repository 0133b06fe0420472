use super::entities::UserRole;
use crate::errors::{DashboardError, Result};
use crate::utils::validate::{validate_email, validate_password, validate_username};
use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求
//
// 进入存储层之前 password 字段会被替换为 argon2 哈希
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username).map_err(DashboardError::validation)?;
        validate_email(&self.email).map_err(DashboardError::validation)?;
        validate_password(&self.password).map_err(DashboardError::validation)?;
        Ok(())
    }
}
