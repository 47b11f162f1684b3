use std::path::PathBuf;

use thiserror::Error;

/// Startup failures; request-time failures are `RosterError`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] roster_config::ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] roster_cache::CacheError),

    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
