use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::config::{AppConfig, Argon2Config};
use crate::errors::{DashboardError, Result};

fn argon2_with(config: &Argon2Config) -> Result<Argon2<'static>> {
    let params = Params::new(config.memory_cost, config.time_cost, config.parallelism, None)
        .map_err(|e| {
            DashboardError::internal_server_error(format!("Invalid argon2 parameters: {e}"))
        })?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// 使用全局 argon2 参数生成 PHC 格式哈希
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with(password, &AppConfig::get().argon2)
}

pub fn hash_password_with(password: &str, config: &Argon2Config) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2_with(config)?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DashboardError::internal_server_error(format!("Password hashing failed: {e}")))
}

/// 校验密码；哈希自带参数，无法解析的哈希一律视为不匹配
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with("Blackboard42", &cheap_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Blackboard42", &hash));
        assert!(!verify_password("Whiteboard42", &hash));
        assert!(!verify_password("Blackboard42", "not-a-hash"));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = Argon2Config {
            memory_cost: 1,
            ..cheap_params()
        };
        assert!(hash_password_with("Blackboard42", &config).is_err());
    }
}
