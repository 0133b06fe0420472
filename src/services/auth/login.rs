use tracing::{info, warn};

use super::AuthService;
use crate::errors::{DashboardError, Result};
use crate::models::auth::{Caller, LoginRequest, LoginResponse};
use crate::utils::jwt::TokenIssuer;
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Username or password is incorrect";

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<LoginResponse> {
    // 1. 根据用户名或邮箱获取用户信息
    let user = service
        .storage
        .get_user_by_username_or_email(request.username.trim())
        .await?
        .ok_or_else(|| DashboardError::unauthorized(INVALID_CREDENTIALS))?;

    // 2. 验证密码
    if !verify_password(&request.password, &user.password_hash) {
        return Err(DashboardError::unauthorized(INVALID_CREDENTIALS));
    }

    if !user.is_active() {
        return Err(DashboardError::unauthorized("User is not active"));
    }

    // 3. 更新最后登录时间，失败不影响登录
    if let Err(e) = service.storage.update_last_login(user.id).await {
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 4. 签发 access token
    let issuer = TokenIssuer::global();
    let access_token = issuer.issue(user.id, user.role).map_err(|e| {
        DashboardError::internal_server_error("Login failed, unable to generate token")
            .with_cause(e)
    })?;

    info!("User {} logged in successfully", user.username);

    Ok(LoginResponse {
        access_token,
        expires_in: issuer.ttl_seconds(),
        caller: Caller::from(&user),
    })
}
