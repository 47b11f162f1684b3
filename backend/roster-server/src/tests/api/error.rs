use crate::RosterError;

use roster_cache::CacheError;
use roster_upstream::UpstreamError;

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use googletest::prelude::*;

async fn render(error: RosterError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn given_missing_credential_when_rendered_then_opaque_500() {
    let (status, body) = render(RosterError::missing_credential("board.token")).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body.as_str(), eq("Internal Server Error"));
}

#[tokio::test]
async fn given_upstream_failure_when_rendered_then_detail_not_exposed() {
    let error = RosterError::from(UpstreamError::url("http://board/", "secret-bearing detail"));
    let (status, body) = render(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body.as_str(), not(contains_substring("secret")));
}

#[tokio::test]
async fn given_cache_failure_when_rendered_then_opaque_500() {
    let json_error = serde_json::from_str::<u32>("x").unwrap_err();
    let error = RosterError::from(CacheError::serialization("cardData_B1", json_error));
    let (status, body) = render(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body.as_str(), eq("Internal Server Error"));
}

#[test]
fn given_missing_credential_when_displayed_then_names_setting() {
    let error = RosterError::missing_credential("board.id");
    assert_that!(error.to_string(), contains_substring("board.id"));
}
