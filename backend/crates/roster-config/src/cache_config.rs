use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_PATH, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_COALESCE_MISSES, DEFAULT_SWEEP_INTERVAL_SECS, MAX_CACHE_TTL_SECS, MIN_CACHE_TTL_SECS,
};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Where cache entries live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    /// SQLite file under the config directory
    #[default]
    Sqlite,
    /// Process memory; lost on restart
    Memory,
}

impl CacheBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheBackend::Sqlite => "sqlite",
            CacheBackend::Memory => "memory",
        }
    }
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(CacheBackend::Sqlite),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(format!("unknown cache backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    /// SQLite file, relative to the config directory
    pub path: String,
    pub ttl_secs: u64,
    /// Serialize concurrent misses on the same key
    pub coalesce_misses: bool,
    /// Expired-row sweep period (0 = disabled)
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            path: String::from(DEFAULT_CACHE_PATH),
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            coalesce_misses: DEFAULT_COALESCE_MISSES,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs < MIN_CACHE_TTL_SECS || self.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::cache(format!(
                "cache.ttl_secs must be {}-{}, got {}",
                MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS, self.ttl_secs
            )));
        }

        let path = std::path::Path::new(&self.path);
        if self.path.trim().is_empty() || path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::cache(
                "cache.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}
