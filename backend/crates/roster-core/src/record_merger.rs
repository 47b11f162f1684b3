use crate::{ExtractedIdentity, MergedRecord, ResolvedIdentity};

/// Join extracted identities with resolver answers.
///
/// Tokens match exactly (case-sensitive). The first resolved entry for a
/// token wins; extracted identities without one are dropped. Output keeps
/// the order of `extracted`.
pub fn merge_records(
    extracted: &[ExtractedIdentity],
    resolved: &[ResolvedIdentity],
) -> Vec<MergedRecord> {
    extracted
        .iter()
        .filter_map(|identity| {
            resolved
                .iter()
                .find(|candidate| candidate.requested_token == identity.identity_token)
                .map(|hit| MergedRecord {
                    display_name: identity.display_name.clone(),
                    canonical_username: hit.canonical_username.clone(),
                    external_id: hit.external_id.clone(),
                    extra_properties: identity.extra_properties.clone(),
                })
        })
        .collect()
}
