use crate::{PipelineProfile, RosterPipeline, ServerError, ServerResult};

use roster_cache::{CacheGateway, CacheStore, MemoryCacheStore, SqliteCacheStore};
use roster_config::{CacheBackend, Config};
use roster_upstream::{BoardClient, IdentityClient};

use std::sync::Arc;

use log::{info, warn};
use reqwest::Client as ReqwestClient;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RosterPipeline>,
    pub cache_backend: CacheBackend,
}

impl AppState {
    /// Wire the HTTP clients and cache store described by `config`
    pub fn from_config(config: &Config, store: Arc<dyn CacheStore>) -> Self {
        let http = ReqwestClient::new();
        let cards = BoardClient::with_client(&config.board.base_url, http.clone());
        let identities = IdentityClient::with_client(
            &config.identity.base_url,
            config.identity.exclude_banned_users,
            http,
        );
        let cache = CacheGateway::new(store, config.cache.coalesce_misses);

        let pipeline = RosterPipeline::new(
            config.board.clone(),
            Arc::new(cards),
            Arc::new(identities),
            cache,
            PipelineProfile::from_config(config),
        );

        Self {
            pipeline: Arc::new(pipeline),
            cache_backend: config.cache.backend,
        }
    }
}

/// Open the configured cache backend
pub async fn open_cache_store(config: &Config) -> ServerResult<Arc<dyn CacheStore>> {
    match config.cache.backend {
        CacheBackend::Sqlite => {
            let path = config.cache_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            info!("Opening cache database: {}", path.display());
            let store = SqliteCacheStore::connect(&path).await?;
            Ok(Arc::new(store))
        }
        CacheBackend::Memory => {
            warn!("Using in-memory cache; entries are lost on restart");
            Ok(Arc::new(MemoryCacheStore::new()))
        }
    }
}
