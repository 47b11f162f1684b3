use crate::Result as CacheResult;

use std::time::Duration;

use async_trait::async_trait;

/// Key-value store with per-entry expiration.
///
/// Values are opaque serialized strings. Expired entries must never be
/// returned by `get`, whether or not they have been purged yet.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Live value for `key`, if any
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Insert or replace `key`, expiring `ttl` from now
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Drop expired entries, returning how many were removed
    async fn purge_expired(&self) -> CacheResult<u64>;
}
