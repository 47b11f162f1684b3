/// Identity-service answer for one requested token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub requested_token: String,
    pub canonical_username: String,
    pub external_id: String,
}

impl ResolvedIdentity {
    pub fn new(
        requested_token: impl Into<String>,
        canonical_username: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Self {
        Self {
            requested_token: requested_token.into(),
            canonical_username: canonical_username.into(),
            external_id: external_id.into(),
        }
    }
}
