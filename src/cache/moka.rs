use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use super::{CacheResult, SessionCache};
use crate::config::CacheConfig;

/// 进程内会话缓存，条目统一按 `cache.default_ttl` 过期
pub struct MokaSessionCache {
    entries: Cache<String, String>,
}

impl MokaSessionCache {
    pub fn new(config: &CacheConfig) -> Self {
        debug!(
            "Session cache: capacity {}, ttl {}s",
            config.max_capacity, config.default_ttl
        );
        Self {
            entries: Cache::builder()
                .max_capacity(config.max_capacity)
                .time_to_live(Duration::from_secs(config.default_ttl))
                .build(),
        }
    }
}

#[async_trait]
impl SessionCache for MokaSessionCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        self.entries
            .get(key)
            .await
            .map_or(CacheResult::NotFound, CacheResult::Found)
    }

    async fn insert_raw(&self, key: String, value: String) {
        self.entries.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.entries.invalidate(key).await;
    }
}
