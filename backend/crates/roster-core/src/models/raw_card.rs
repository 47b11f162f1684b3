use crate::CardField;

use serde::Deserialize;

/// A member card as delivered by the board API.
///
/// Only the keys the pipeline reads are modeled; everything else the board
/// sends is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub desc: Option<String>,

    #[serde(default, rename = "amazingFields")]
    pub amazing_fields: Option<CardFieldSet>,
}

/// Container the board nests structured fields under
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardFieldSet {
    #[serde(default)]
    pub fields: Vec<CardField>,
}

impl RawCard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn with_field(mut self, field: CardField) -> Self {
        self.amazing_fields
            .get_or_insert_with(CardFieldSet::default)
            .fields
            .push(field);
        self
    }

    /// Structured fields, empty when the card carries none
    pub fn fields(&self) -> &[CardField] {
        self.amazing_fields
            .as_ref()
            .map(|set| set.fields.as_slice())
            .unwrap_or_default()
    }
}
