use crate::{ConfigError, ConfigErrorResult, DEFAULT_BOARD_BASE_URL, is_http_url};

use std::fmt;

use serde::Deserialize;

/// Card-board API settings.
///
/// The board id and token are optional at load time: a deployment may boot
/// and serve a warm cache without them. Requests that need them fail then.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub id: Option<String>,
    pub token: Option<String>,
    pub base_url: String,
}

/// Board id and token, both present
#[derive(Clone, PartialEq, Eq)]
pub struct BoardCredentials {
    pub board_id: String,
    pub token: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id: None,
            token: None,
            base_url: String::from(DEFAULT_BOARD_BASE_URL),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::upstream(format!(
                "board.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Non-blank board id
    pub fn board_id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    /// Both credentials, or `None` if either is missing or blank
    pub fn credentials(&self) -> Option<BoardCredentials> {
        Some(BoardCredentials {
            board_id: self.board_id()?.to_string(),
            token: non_blank(self.token.as_deref())?.to_string(),
        })
    }

    /// Names of the credentials that are missing
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.board_id().is_none() {
            missing.push("board.id");
        }
        if non_blank(self.token.as_deref()).is_none() {
            missing.push("board.token");
        }
        missing
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

// The token never reaches the logs
impl fmt::Debug for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardConfig")
            .field("id", &self.id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for BoardCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardCredentials")
            .field("board_id", &self.board_id)
            .field("token", &"<redacted>")
            .finish()
    }
}
