use tracing::info;

use super::AuthService;
use crate::errors::{DashboardError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::utils::password::hash_password;

pub async fn create_user(service: &AuthService, mut request: CreateUserRequest) -> Result<User> {
    request.validate()?;
    request.username = request.username.trim().to_string();
    request.email = request.email.trim().to_lowercase();

    if service
        .storage
        .get_user_by_username_or_email(&request.username)
        .await?
        .is_some()
    {
        return Err(DashboardError::conflict(format!(
            "Username '{}' is already taken",
            request.username
        )));
    }

    let password_hash = hash_password(&request.password)?;
    let user = service.storage.create_user(request, password_hash).await?;

    info!("User {} created with role {}", user.username, user.role);
    Ok(user)
}
