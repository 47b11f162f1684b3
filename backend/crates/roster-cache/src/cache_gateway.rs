use crate::{CacheError, CacheStore, KeyedLocks, Result as CacheResult};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Cache-aside access to a `CacheStore`.
///
/// With coalescing enabled, concurrent misses on one key are serialized: the
/// first caller computes and stores, later callers find the fresh entry once
/// they get the lock. Without it every missing caller computes and the last
/// write wins.
#[derive(Clone)]
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    locks: Option<KeyedLocks>,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, coalesce_misses: bool) -> Self {
        Self {
            store,
            locks: coalesce_misses.then(KeyedLocks::new),
        }
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub fn coalesces_misses(&self) -> bool {
        self.locks.is_some()
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// A failing `compute` stores nothing. Store failures propagate.
    pub async fn get_or_compute<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.lookup(key).await? {
            debug!("Cache hit for {}", key);
            return Ok(hit);
        }

        let _guard = match &self.locks {
            Some(locks) => {
                let guard = locks.lock(key).await;
                if let Some(hit) = self.lookup(key).await? {
                    debug!("Cache for {} filled while waiting", key);
                    return Ok(hit);
                }
                Some(guard)
            }
            None => None,
        };

        info!("Cache miss for {}, computing", key);
        let value = compute().await?;

        let serialized =
            serde_json::to_string(&value).map_err(|e| CacheError::serialization(key, e))?;
        self.store.put(key, &serialized, ttl).await?;

        Ok(value)
    }

    /// Parsed entry, or `None` for misses and entries that no longer parse
    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unparseable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }
}
