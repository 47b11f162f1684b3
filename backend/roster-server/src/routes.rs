use crate::{AppState, get_roster, health};

use axum::{Router, http::Method, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Roster
        .route("/", get(get_roster))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .with_state(state)
        // Read-only CORS so browser pages can embed the roster
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
}
