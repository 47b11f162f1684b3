use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which card source is consulted first for the identity token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPriority {
    /// Structured field list, then the parsed description
    #[default]
    StructuredFieldFirst,
    /// Parsed description, then the structured field list
    DescriptionFirst,
}

impl TokenPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPriority::StructuredFieldFirst => "structured_field_first",
            TokenPriority::DescriptionFirst => "description_first",
        }
    }
}

impl fmt::Display for TokenPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured_field_first" | "structured" => Ok(TokenPriority::StructuredFieldFirst),
            "description_first" | "description" => Ok(TokenPriority::DescriptionFirst),
            other => Err(format!("unknown token priority '{other}'")),
        }
    }
}
