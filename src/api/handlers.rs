//! HTTP API handlers.
//!
//! Every handler is a pure function of the clock: no shared state is read
//! or written, so concurrent requests need no coordination.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::users::{self, UserRecord};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always the literal "UP"; this service has no failure detection.
    pub status: String,
    /// Wall-clock time of the check, RFC 3339.
    pub timestamp: String,
}

impl HealthResponse {
    /// Build a response stamped with the current UTC time.
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    metrics::inc_health_requests();
    Json(HealthResponse::up())
}

/// Users handler - returns the fixed dataset as a JSON array.
pub async fn list_users() -> Json<&'static [UserRecord]> {
    metrics::inc_users_requests();
    Json(users::all_users())
}

/// Fallback handler for every unmatched method/path combination.
pub async fn not_found() -> StatusCode {
    metrics::inc_not_found_requests();
    StatusCode::NOT_FOUND
}
