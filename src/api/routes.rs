//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, list_users, not_found};

/// Create the API router.
///
/// Matching is exact on method and path. Registering `not_found` as the
/// per-route method fallback keeps the contract uniform: a POST to
/// `/health` is 404, not 405.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/api/users", get(list_users).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
