//! In-process stand-ins for the board and identity services

use roster_config::BoardCredentials;
use roster_core::{RawCard, ResolvedIdentity};
use roster_upstream::{CardSource, IdentityLookup, UpstreamError, UpstreamResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;

#[derive(Default)]
pub struct StubCards {
    pub cards: Vec<RawCard>,
    pub fail_with_status: Option<u16>,
    pub delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubCards {
    pub fn new(cards: Vec<RawCard>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Default::default()
        }
    }

    pub fn slow(cards: Vec<RawCard>, delay: Duration) -> Self {
        Self {
            cards,
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardSource for StubCards {
    async fn fetch_cards(&self, _credentials: &BoardCredentials) -> UpstreamResult<Vec<RawCard>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(status) = self.fail_with_status {
            return Err(UpstreamError::Status {
                service: "board API",
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.cards.clone())
    }
}

/// Resolves tokens from a fixed directory; an unavailable stub answers `[]`
#[derive(Default)]
pub struct StubIdentities {
    directory: HashMap<String, (String, String)>,
    requests: Mutex<Vec<Vec<String>>>,
}

impl StubIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: &str, username: &str, id: &str) -> Self {
        self.directory
            .insert(token.to_string(), (username.to_string(), id.to_string()));
        self
    }

    /// Token batches received, one entry per call
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityLookup for StubIdentities {
    async fn resolve(&self, tokens: &[String]) -> UpstreamResult<Vec<ResolvedIdentity>> {
        self.requests.lock().unwrap().push(tokens.to_vec());

        Ok(tokens
            .iter()
            .filter_map(|token| {
                self.directory
                    .get(token)
                    .map(|(name, id)| ResolvedIdentity::new(token.clone(), name.clone(), id.clone()))
            })
            .collect())
    }
}
