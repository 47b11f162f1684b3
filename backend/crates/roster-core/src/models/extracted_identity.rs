use std::collections::BTreeMap;

/// A card that passed membership checks, holding its raw identity token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIdentity {
    pub display_name: String,
    pub identity_token: String,
    pub extra_properties: Option<BTreeMap<String, String>>,
}
