use crate::{ApiResult, PipelineProfile, RosterError};

use roster_cache::{CacheGateway, cache_key};
use roster_config::BoardConfig;
use roster_core::{ExtractedIdentity, FieldExtractor, MergedRecord, merge_records};
use roster_upstream::{CardSource, IdentityLookup};

use std::collections::HashSet;
use std::sync::Arc;

use log::info;

/// Board cards to resolved roster, behind the cache.
///
/// A request reads the cache first. On a miss it fetches the board, extracts
/// member identities, resolves their tokens in one batch, merges and stores
/// the result under `cardData_<board id>`.
pub struct RosterPipeline {
    board: BoardConfig,
    cards: Arc<dyn CardSource>,
    identities: Arc<dyn IdentityLookup>,
    cache: CacheGateway,
    extractor: FieldExtractor,
    profile: PipelineProfile,
}

impl RosterPipeline {
    pub fn new(
        board: BoardConfig,
        cards: Arc<dyn CardSource>,
        identities: Arc<dyn IdentityLookup>,
        cache: CacheGateway,
        profile: PipelineProfile,
    ) -> Self {
        Self {
            board,
            cards,
            identities,
            cache,
            extractor: FieldExtractor::new(profile.rules.clone()),
            profile,
        }
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    pub fn cache(&self) -> &CacheGateway {
        &self.cache
    }

    pub fn profile(&self) -> &PipelineProfile {
        &self.profile
    }

    /// Cached roster, computed on a miss
    pub async fn roster(&self) -> ApiResult<Vec<MergedRecord>> {
        let board_id = self
            .board
            .board_id()
            .ok_or_else(|| RosterError::missing_credential("board.id"))?;

        self.cache
            .get_or_compute(&cache_key(board_id), self.profile.ttl, || self.compute())
            .await
    }

    async fn compute(&self) -> ApiResult<Vec<MergedRecord>> {
        let credentials = self
            .board
            .credentials()
            .ok_or_else(|| RosterError::missing_credential("board.token"))?;

        let cards = self.cards.fetch_cards(&credentials).await?;
        let members = self.extractor.extract_all(&cards);

        let tokens = distinct_tokens(&members);
        let resolved = self.identities.resolve(&tokens).await?;

        let records = merge_records(&members, &resolved);
        info!(
            "Board {}: {} cards, {} members, {} resolved, {} records",
            credentials.board_id,
            cards.len(),
            members.len(),
            resolved.len(),
            records.len()
        );

        Ok(records)
    }
}

/// Identity tokens in first-seen order, each once
fn distinct_tokens(members: &[ExtractedIdentity]) -> Vec<String> {
    let mut seen = HashSet::new();
    members
        .iter()
        .filter(|member| seen.insert(member.identity_token.as_str()))
        .map(|member| member.identity_token.clone())
        .collect()
}
