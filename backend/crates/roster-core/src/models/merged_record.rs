use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Roster entry served to clients and persisted in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    pub display_name: String,
    pub canonical_username: String,
    pub external_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_properties: Option<BTreeMap<String, String>>,
}
