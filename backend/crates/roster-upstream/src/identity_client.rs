use crate::UpstreamResult;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client as ReqwestClient;
use roster_core::{ResolvedIdentity, scalar_text};
use serde::{Deserialize, Serialize};

/// Resolves identity tokens to canonical usernames and ids
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    /// Resolve a batch of tokens in one round trip.
    ///
    /// A rejected batch yields an empty list, not an error.
    async fn resolve(&self, tokens: &[String]) -> UpstreamResult<Vec<ResolvedIdentity>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernamesRequest<'a> {
    usernames: &'a [String],
    exclude_banned_users: bool,
}

#[derive(Deserialize)]
struct UsernamesResponse {
    #[serde(default)]
    data: Vec<UserEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserEntry {
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    requested_username: Option<String>,
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    id: Option<String>,
}

impl UserEntry {
    fn into_resolved(self) -> Option<ResolvedIdentity> {
        Some(ResolvedIdentity::new(
            self.requested_username?,
            self.name?,
            self.id?,
        ))
    }
}

/// HTTP client for the username-lookup API
pub struct IdentityClient {
    pub base_url: String,
    pub exclude_banned_users: bool,
    client: ReqwestClient,
}

impl IdentityClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://users.roblox.com")
    /// * `exclude_banned_users` - Ask the service to omit banned accounts
    pub fn new(base_url: &str, exclude_banned_users: bool) -> Self {
        Self::with_client(base_url, exclude_banned_users, ReqwestClient::new())
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(base_url: &str, exclude_banned_users: bool, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exclude_banned_users,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/usernames/users", self.base_url)
    }
}

#[async_trait]
impl IdentityLookup for IdentityClient {
    async fn resolve(&self, tokens: &[String]) -> UpstreamResult<Vec<ResolvedIdentity>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let body = UsernamesRequest {
            usernames: tokens,
            exclude_banned_users: self.exclude_banned_users,
        };

        debug!("Resolving {} identity tokens", tokens.len());
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Identity lookup rejected with status {}", status.as_u16());
            return Ok(Vec::new());
        }

        let parsed: UsernamesResponse = response.json().await?;
        let total = parsed.data.len();
        let resolved: Vec<ResolvedIdentity> = parsed
            .data
            .into_iter()
            .filter_map(UserEntry::into_resolved)
            .collect();

        if resolved.len() < total {
            warn!(
                "Skipped {} incomplete identity entries",
                total - resolved.len()
            );
        }

        Ok(resolved)
    }
}
