//! 会话缓存
//!
//! 认证中间件以 token 为键缓存调用者身份，避免每个请求都查询数据库。

mod moka;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::config::CacheConfig;

pub use self::moka::MokaSessionCache;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait SessionCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
}

/// 读取并反序列化缓存值，反序列化失败时移除该键
pub async fn get_json<T: DeserializeOwned>(cache: &dyn SessionCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Dropping undecodable cache entry {}: {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        CacheResult::NotFound => None,
    }
}

pub async fn insert_json<T: Serialize>(cache: &dyn SessionCache, key: String, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        cache.insert_raw(key, json).await;
    }
}

pub fn create_session_cache(config: &CacheConfig) -> Arc<dyn SessionCache> {
    Arc::new(MokaSessionCache::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Caller;
    use crate::models::users::entities::UserRole;

    fn config() -> CacheConfig {
        CacheConfig {
            default_ttl: 60,
            max_capacity: 16,
        }
    }

    #[tokio::test]
    async fn test_json_roundtrip_through_cache() {
        let cache = create_session_cache(&config());
        let caller = Caller {
            user_id: 1,
            username: "admin".to_string(),
            role: UserRole::Admin,
        };

        insert_json(cache.as_ref(), "session:abc".to_string(), &caller).await;
        let cached: Option<Caller> = get_json(cache.as_ref(), "session:abc").await;
        assert_eq!(cached, Some(caller));

        cache.remove("session:abc").await;
        let cached: Option<Caller> = get_json(cache.as_ref(), "session:abc").await;
        assert!(cached.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_removed() {
        let cache = create_session_cache(&config());
        cache
            .insert_raw("session:bad".to_string(), "not json".to_string())
            .await;

        let cached: Option<Caller> = get_json(cache.as_ref(), "session:bad").await;
        assert!(cached.is_none());
        assert_eq!(cache.get_raw("session:bad").await, CacheResult::NotFound);
    }
}
