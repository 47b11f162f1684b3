use crate::{
    DEFAULT_DESCRIPTION_KEY, DEFAULT_IDENTITY_FIELD_NAMES, ExtractedIdentity, RawCard,
    TEMPLATE_CARD_NAME, TokenPriority, parse_description,
};

use std::collections::BTreeMap;

/// Where identity tokens are looked for, and in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRules {
    pub priority: TokenPriority,
    /// Description key whose value is the identity token
    pub description_key: String,
    /// Structured field names carrying the token, highest priority first
    pub identity_field_names: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            priority: TokenPriority::default(),
            description_key: String::from(DEFAULT_DESCRIPTION_KEY),
            identity_field_names: DEFAULT_IDENTITY_FIELD_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// Turns raw cards into member identities
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    rules: ExtractionRules,
}

impl FieldExtractor {
    pub fn new(rules: ExtractionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// Extract every member card, keeping board order
    pub fn extract_all(&self, cards: &[RawCard]) -> Vec<ExtractedIdentity> {
        cards.iter().filter_map(|card| self.extract(card)).collect()
    }

    /// Extract one card.
    ///
    /// `None` means the card is not a member: blank or template name, or no
    /// identity token in either source.
    pub fn extract(&self, card: &RawCard) -> Option<ExtractedIdentity> {
        let display_name = card.name.trim();
        if display_name.is_empty() || display_name == TEMPLATE_CARD_NAME {
            return None;
        }

        let parsed = card.desc.as_deref().and_then(parse_description);

        let identity_token = match self.rules.priority {
            TokenPriority::StructuredFieldFirst => self
                .token_from_fields(card)
                .or_else(|| self.token_from_description(parsed.as_ref())),
            TokenPriority::DescriptionFirst => self
                .token_from_description(parsed.as_ref())
                .or_else(|| self.token_from_fields(card)),
        }?;

        Some(ExtractedIdentity {
            display_name: display_name.to_string(),
            identity_token,
            extra_properties: self.extra_properties(parsed.as_ref()),
        })
    }

    fn token_from_description(&self, parsed: Option<&BTreeMap<String, String>>) -> Option<String> {
        parsed?
            .get(&self.rules.description_key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(String::from)
    }

    fn token_from_fields(&self, card: &RawCard) -> Option<String> {
        self.rules.identity_field_names.iter().find_map(|wanted| {
            card.fields()
                .iter()
                .filter(|field| field.name.trim() == wanted)
                .find_map(|field| field.text())
                .map(String::from)
        })
    }

    /// Copy of the parsed description without the identity key
    fn extra_properties(
        &self,
        parsed: Option<&BTreeMap<String, String>>,
    ) -> Option<BTreeMap<String, String>> {
        let remaining: BTreeMap<String, String> = parsed?
            .iter()
            .filter(|(key, _)| **key != self.rules.description_key)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        (!remaining.is_empty()).then_some(remaining)
    }
}
