use crate::{UpstreamError, UpstreamResult};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Url};
use roster_config::BoardCredentials;
use roster_core::RawCard;
use serde::Deserialize;

const SERVICE: &str = "board API";

/// Source of member cards for a board
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_cards(&self, credentials: &BoardCredentials) -> UpstreamResult<Vec<RawCard>>;
}

#[derive(Deserialize)]
struct CardsResponse {
    cards: Vec<RawCard>,
}

/// HTTP client for the card-board API
pub struct BoardClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl BoardClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.amazingpowerups.com")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Cards endpoint for a board, token in the query string
    pub fn cards_url(&self, credentials: &BoardCredentials) -> UpstreamResult<Url> {
        let raw = format!(
            "{}/api/data/v1/boards/{}/cards",
            self.base_url, credentials.board_id
        );
        Url::parse_with_params(&raw, [("token", credentials.token.as_str())])
            .map_err(|e| UpstreamError::url(&raw, e.to_string()))
    }
}

#[async_trait]
impl CardSource for BoardClient {
    async fn fetch_cards(&self, credentials: &BoardCredentials) -> UpstreamResult<Vec<RawCard>> {
        let url = self.cards_url(credentials)?;

        debug!("Fetching cards for board {}", credentials.board_id);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::status(SERVICE, status));
        }

        let body: CardsResponse = response.json().await?;
        debug!(
            "Board {} returned {} cards",
            credentials.board_id,
            body.cards.len()
        );

        Ok(body.cards)
    }
}
