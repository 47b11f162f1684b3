mod board_config;
mod cache_config;
mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod pipeline_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use board_config::{BoardConfig, BoardCredentials};
pub use cache_config::{CacheBackend, CacheConfig};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use pipeline_config::PipelineConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8787;
const MIN_PORT: u16 = 1024;

const DEFAULT_BOARD_BASE_URL: &str = "https://api.amazingpowerups.com";
const DEFAULT_IDENTITY_BASE_URL: &str = "https://users.roblox.com";
const DEFAULT_EXCLUDE_BANNED_USERS: bool = true;

const DEFAULT_CACHE_PATH: &str = "cache.db";
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const MIN_CACHE_TTL_SECS: u64 = 60;
const MAX_CACHE_TTL_SECS: u64 = 86_400;
const DEFAULT_COALESCE_MISSES: bool = true;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 900;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".roster";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Accept only absolute http(s) URLs for upstream services
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
