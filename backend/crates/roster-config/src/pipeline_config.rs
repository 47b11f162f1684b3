use crate::{ConfigError, ConfigErrorResult};

use roster_core::{
    DEFAULT_DESCRIPTION_KEY, DEFAULT_IDENTITY_FIELD_NAMES, ExtractionRules, TokenPriority,
};

use serde::Deserialize;

/// Card extraction settings; selects the deployment variant
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub token_priority: TokenPriority,
    pub description_key: String,
    pub identity_field_names: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            token_priority: TokenPriority::default(),
            description_key: String::from(DEFAULT_DESCRIPTION_KEY),
            identity_field_names: DEFAULT_IDENTITY_FIELD_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.description_key.trim().is_empty() {
            return Err(ConfigError::pipeline(
                "pipeline.description_key cannot be empty",
            ));
        }

        if self.identity_field_names.is_empty() {
            return Err(ConfigError::pipeline(
                "pipeline.identity_field_names must name at least one field",
            ));
        }

        if self
            .identity_field_names
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(ConfigError::pipeline(
                "pipeline.identity_field_names cannot contain blank names",
            ));
        }

        Ok(())
    }

    pub fn extraction_rules(&self) -> ExtractionRules {
        ExtractionRules {
            priority: self.token_priority,
            description_key: self.description_key.trim().to_string(),
            identity_field_names: self
                .identity_field_names
                .iter()
                .map(|name| name.trim().to_string())
                .collect(),
        }
    }
}
