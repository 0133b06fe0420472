use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{SessionCache, create_session_cache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::services::{AuthService, GradebookService};
use crate::storage::Storage;
use crate::utils::validate::validate_password;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn SessionCache>,
    pub gradebooks: Arc<GradebookService>,
}

/// 生成满足密码强度规则的随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    loop {
        let password: String = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();
        if validate_password(&password).is_ok() {
            return password;
        }
    }
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个默认的 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 优先使用环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@localhost.localdomain".to_string(),
        password,
        role: UserRole::Admin,
        display_name: Some("Administrator".to_string()),
    };

    match AuthService::new(storage.clone()).create_user(request).await {
        Ok(user) => info!(
            "Default admin account created (ID: {}, username: {})",
            user.id, user.username
        ),
        Err(e) => warn!("Failed to create admin account: {}", e),
    }
}

/// 准备服务器启动的上下文：存储、会话缓存与成绩册服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    let cache = create_session_cache(&config.cache);
    warn!(
        "Session cache initialized (capacity: {}, ttl: {}s)",
        config.cache.max_capacity, config.cache.default_ttl
    );

    let gradebooks = Arc::new(GradebookService::from_app_config());

    Ok(StartupContext {
        storage,
        cache,
        gradebooks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_is_alphanumeric() {
        let password = generate_random_password(16);
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(validate_password(&password).is_ok());
    }
}
