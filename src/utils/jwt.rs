//! Access token 签发与校验
//!
//! 仪表盘只使用短期 access token，不设 refresh token；过期后重新登录。

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, JwtConfig};
use crate::models::users::entities::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), Duration::minutes(config.access_token_expiry))
    }

    /// 使用全局配置中的密钥与有效期
    pub fn global() -> Self {
        Self::from_config(&AppConfig::get().jwt)
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn issue(&self, user_id: i64, role: UserRole) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new("unit-test-secret", Duration::minutes(5));
        let token = issuer.issue(42, UserRole::Teacher).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.role, UserRole::Teacher);
        assert_eq!(issuer.ttl_seconds(), 300);

        let other = TokenIssuer::new("other-secret", Duration::minutes(5));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new("unit-test-secret", Duration::minutes(-10));
        let token = issuer.issue(1, UserRole::Admin).unwrap();
        assert!(issuer.verify(&token).is_err());
    }
}
