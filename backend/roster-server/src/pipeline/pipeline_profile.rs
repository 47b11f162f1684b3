use roster_config::Config;
use roster_core::ExtractionRules;

use std::time::Duration;

/// Per-deployment knobs: how long a roster is cached and where tokens come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineProfile {
    pub ttl: Duration,
    pub rules: ExtractionRules,
}

impl PipelineProfile {
    pub fn from_config(config: &Config) -> Self {
        Self {
            ttl: config.cache.ttl(),
            rules: config.pipeline.extraction_rules(),
        }
    }
}

impl Default for PipelineProfile {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
