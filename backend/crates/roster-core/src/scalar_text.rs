//! Lenient narrowing of loosely-typed upstream JSON scalars into text.
//!
//! Both upstream services occasionally ship numbers where strings are
//! expected (field values, user ids). These helpers accept any scalar and
//! drop everything else.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Narrow a JSON value to text: strings pass through, numbers and booleans
/// are rendered, anything else is `None`.
pub fn narrow(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `deserialize_with` adapter for `Option<String>` fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(narrow))
}
