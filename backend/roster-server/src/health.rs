use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service status with configuration readiness
pub async fn health(State(state): State<AppState>) -> Response {
    let missing = state.pipeline.board().missing_credentials();
    let board = if missing.is_empty() {
        "configured"
    } else {
        "missing_credentials"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "cache": state.cache_backend.as_str(),
            "coalesce_misses": state.pipeline.cache().coalesces_misses(),
            "board": board,
        },
        "missing_credentials": missing,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
