use crate::{
    BoardConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, CacheConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, IdentityConfig, LoggingConfig, PipelineConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub board: BoardConfig,
    pub identity: IdentityConfig,
    pub pipeline: PipelineConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ROSTER_CONFIG_DIR env var, else use ./.roster/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ROSTER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ROSTER_CONFIG_DIR env var > ./.roster/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    ///
    /// Missing board credentials are deliberately not an error here; they
    /// only fail the requests that need them.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.board.validate()?;
        self.identity.validate()?;
        self.pipeline.validate()?;
        self.cache.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite cache file
    pub fn cache_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.cache.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  board: {} via {} (token: {})",
            self.board.board_id().unwrap_or("<unset>"),
            self.board.base_url,
            if self.board.credentials().is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  identity: {} (exclude banned: {})",
            self.identity.base_url, self.identity.exclude_banned_users
        );
        info!(
            "  pipeline: {} (description key '{}', fields {:?})",
            self.pipeline.token_priority,
            self.pipeline.description_key,
            self.pipeline.identity_field_names
        );
        info!(
            "  cache: {:?} {} ttl={}s coalesce={} sweep={}s",
            self.cache.backend,
            self.cache.path,
            self.cache.ttl_secs,
            self.cache.coalesce_misses,
            self.cache.sweep_interval_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        let missing = self.board.missing_credentials();
        if !missing.is_empty() {
            warn!(
                "Missing board credentials ({}); cache misses will fail",
                missing.join(", ")
            );
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ROSTER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ROSTER_SERVER_PORT", &mut self.server.port);

        // Board
        Self::apply_env_option_string("ROSTER_BOARD_ID", &mut self.board.id);
        Self::apply_env_option_string("ROSTER_BOARD_TOKEN", &mut self.board.token);
        Self::apply_env_string("ROSTER_BOARD_BASE_URL", &mut self.board.base_url);

        // Identity
        Self::apply_env_string("ROSTER_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_bool(
            "ROSTER_IDENTITY_EXCLUDE_BANNED",
            &mut self.identity.exclude_banned_users,
        );

        // Pipeline
        Self::apply_env_parse("ROSTER_TOKEN_PRIORITY", &mut self.pipeline.token_priority);
        Self::apply_env_string(
            "ROSTER_DESCRIPTION_KEY",
            &mut self.pipeline.description_key,
        );
        Self::apply_env_list(
            "ROSTER_IDENTITY_FIELD_NAMES",
            &mut self.pipeline.identity_field_names,
        );

        // Cache
        Self::apply_env_parse("ROSTER_CACHE_BACKEND", &mut self.cache.backend);
        Self::apply_env_string("ROSTER_CACHE_PATH", &mut self.cache.path);
        Self::apply_env_parse("ROSTER_CACHE_TTL_SECS", &mut self.cache.ttl_secs);
        Self::apply_env_bool("ROSTER_CACHE_COALESCE", &mut self.cache.coalesce_misses);
        Self::apply_env_parse(
            "ROSTER_CACHE_SWEEP_INTERVAL_SECS",
            &mut self.cache.sweep_interval_secs,
        );

        // Logging
        Self::apply_env_parse("ROSTER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ROSTER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ROSTER_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
