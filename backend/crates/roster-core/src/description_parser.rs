//! Free-text card description parsing.
//!
//! Descriptions are written by people, so the format is loose: one
//! `key: value` pair per line, keys sometimes wrapped in markdown emphasis,
//! and long values wrapped onto following lines without a separator.

use std::collections::BTreeMap;

const SEPARATOR: char = ':';
const CONTINUATION_JOIN: &str = ", ";
const EMPHASIS_MARKERS: [char; 2] = ['*', '_'];
const BOLD_CLOSERS: [&str; 2] = ["**", "__"];

/// Treat a whitespace-only description as absent
pub fn normalize_description(desc: Option<&str>) -> Option<&str> {
    desc.filter(|text| !text.trim().is_empty())
}

/// Parse a description block into a key -> value mapping.
///
/// Returns `None` when the block is blank or yields no entries.
pub fn parse_description(text: &str) -> Option<BTreeMap<String, String>> {
    let text = normalize_description(Some(text))?;

    let mut entries: BTreeMap<String, String> = BTreeMap::new();
    let mut current_key: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(SEPARATOR) {
            Some((raw_key, raw_value)) => {
                let key = strip_emphasis(raw_key);
                if key.is_empty() {
                    continue;
                }

                let value = clean_value(raw_value);
                if !value.is_empty() {
                    entries.insert(key.to_string(), value.to_string());
                }
                current_key = Some(key.to_string());
            }
            None => {
                let Some(key) = current_key.as_ref() else {
                    continue;
                };

                entries
                    .entry(key.clone())
                    .and_modify(|value| {
                        value.push_str(CONTINUATION_JOIN);
                        value.push_str(line);
                    })
                    .or_insert_with(|| line.to_string());
            }
        }
    }

    (!entries.is_empty()).then_some(entries)
}

fn strip_emphasis(raw_key: &str) -> &str {
    raw_key.trim().trim_matches(EMPHASIS_MARKERS).trim()
}

/// `**Key:** value` leaves the bold closer at the head of the value
fn clean_value(raw_value: &str) -> &str {
    let value = raw_value.trim();
    BOLD_CLOSERS
        .iter()
        .find_map(|closer| value.strip_prefix(closer))
        .unwrap_or(value)
        .trim()
}
