use serde::Deserialize;

/// One structured `{name, value}` entry attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardField {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "crate::scalar_text::deserialize")]
    pub value: Option<String>,
}

impl CardField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Trimmed value, or `None` when missing or blank
    pub fn text(&self) -> Option<&str> {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
