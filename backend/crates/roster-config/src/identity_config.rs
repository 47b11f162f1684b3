use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXCLUDE_BANNED_USERS, DEFAULT_IDENTITY_BASE_URL,
    is_http_url,
};

use serde::Deserialize;

/// Identity-resolution API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    pub exclude_banned_users: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            exclude_banned_users: DEFAULT_EXCLUDE_BANNED_USERS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::upstream(format!(
                "identity.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
