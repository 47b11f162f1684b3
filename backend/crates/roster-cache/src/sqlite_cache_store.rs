use crate::{CacheStore, Result as CacheResult};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Cache entries persisted in a SQLite table
#[derive(Clone)]
pub struct SqliteCacheStore {
    pool: SqlitePool,
}

impl SqliteCacheStore {
    /// Open (or create) the cache database at `path` and run migrations
    pub async fn connect(path: &Path) -> CacheResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT),
            )
            .await?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database; a single connection keeps it alive
    pub async fn in_memory() -> CacheResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::new().filename(":memory:"))
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> CacheResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Utc::now().timestamp_millis();

        let value = sqlx::query_scalar::<_, String>(
            r#"
              SELECT value
              FROM cache_entries
              WHERE cache_key = ? AND expires_at > ?
              "#,
        )
        .bind(key)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at = Utc::now().timestamp_millis().saturating_add(ttl_millis);

        sqlx::query(
            r#"
              INSERT INTO cache_entries (cache_key, value, expires_at)
              VALUES (?, ?, ?)
              ON CONFLICT(cache_key) DO UPDATE SET
                  value = excluded.value,
                  expires_at = excluded.expires_at
              "#,
        )
        .bind(key)
        .bind(value)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        debug!("Stored cache entry {} (expires in {}s)", key, ttl.as_secs());
        Ok(())
    }

    async fn purge_expired(&self) -> CacheResult<u64> {
        let now = Utc::now().timestamp_millis();

        let result = sqlx::query("DELETE FROM cache_entries WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
