pub mod login;
pub mod users;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 用户名或邮箱 + 密码登录
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        login::handle_login(self, request).await
    }

    // 管理员创建账户
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        users::create_user(self, request).await
    }
}
