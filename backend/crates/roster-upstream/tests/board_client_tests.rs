//! Board client against a wiremock board API

use roster_config::BoardCredentials;
use roster_upstream::{BoardClient, CardSource, UpstreamError};

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn credentials() -> BoardCredentials {
    BoardCredentials {
        board_id: "B1".to_string(),
        token: "secret".to_string(),
    }
}

#[tokio::test]
async fn given_cards_when_fetching_then_cards_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data/v1/boards/B1/cards"))
        .and(query_param("token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": [
                {
                    "name": "Aria",
                    "desc": "IGN: aria_rbx\nRank: Knight",
                    "idList": "ignored",
                    "amazingFields": {
                        "fields": [
                            { "name": "IGN", "value": "aria_rbx" },
                            { "name": "Level", "value": 7 }
                        ]
                    }
                },
                { "name": "Template" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let cards = client.fetch_cards(&credentials()).await.unwrap();

    assert_that!(cards.len(), eq(2));
    assert_that!(cards[0].name.as_str(), eq("Aria"));
    assert_that!(cards[0].desc.as_deref(), some(eq("IGN: aria_rbx\nRank: Knight")));
    assert_that!(cards[0].fields().len(), eq(2));
    assert_that!(cards[0].fields()[1].value.as_deref(), some(eq("7")));
    assert_that!(cards[1].fields(), is_empty());
}

#[tokio::test]
async fn given_empty_board_when_fetching_then_no_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data/v1/boards/B1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cards": [] })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let cards = client.fetch_cards(&credentials()).await.unwrap();

    assert_that!(cards, is_empty());
}

#[tokio::test]
async fn given_unauthorized_when_fetching_then_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data/v1/boards/B1/cards"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let err = client.fetch_cards(&credentials()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Status { status: 401, .. }));
}

#[tokio::test]
async fn given_body_without_cards_when_fetching_then_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data/v1/boards/B1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let err = client.fetch_cards(&credentials()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Http { .. }));
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_then_http_error() {
    let client = BoardClient::new("http://127.0.0.1:9");
    let err = client.fetch_cards(&credentials()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Http { .. }));
}
