#![allow(dead_code)]

//! Test infrastructure for roster-server HTTP tests

use roster_cache::{CacheStore, MemoryCacheStore};
use roster_config::{CacheBackend, Config};
use roster_server::{AppState, build_router};

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const BOARD_ID: &str = "B1";
pub const BOARD_TOKEN: &str = "secret";

/// Mock board and identity services
pub struct Upstreams {
    pub board: MockServer,
    pub identity: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            board: MockServer::start().await,
            identity: MockServer::start().await,
        }
    }

    /// Config pointing at the mocks, memory cache
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.board.id = Some(BOARD_ID.to_string());
        config.board.token = Some(BOARD_TOKEN.to_string());
        config.board.base_url = self.board.uri();
        config.identity.base_url = self.identity.uri();
        config.cache.backend = CacheBackend::Memory;
        config
    }

    pub async fn mount_cards(&self, cards: Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/data/v1/boards/{BOARD_ID}/cards")))
            .and(query_param("token", BOARD_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cards": cards })))
            .expect(expected_calls)
            .mount(&self.board)
            .await;
    }

    pub async fn mount_users(&self, users: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/usernames/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": users })))
            .mount(&self.identity)
            .await;
    }
}

/// Build a TestServer over `config`, returning the store it caches into
pub fn create_test_server(config: &Config) -> (TestServer, Arc<MemoryCacheStore>) {
    let store = Arc::new(MemoryCacheStore::new());
    let shared: Arc<dyn CacheStore> = store.clone();
    let app = build_router(AppState::from_config(config, shared));

    let server = TestServer::builder()
        .build(app)
        .expect("Failed to create test server");

    (server, store)
}
