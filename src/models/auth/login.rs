use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Caller;

/// `auth.login` 请求体，`username` 也可以填写邮箱
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    /// 有效期（秒）
    pub expires_in: i64,
    pub caller: Caller,
}
