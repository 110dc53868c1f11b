//! Request counters for monitoring.

use metrics::{counter, describe_counter};
use tracing::debug;

/// Health requests counter metric name.
pub const METRIC_HEALTH_REQUESTS: &str = "health_requests_total";
/// Users requests counter metric name.
pub const METRIC_USERS_REQUESTS: &str = "users_requests_total";
/// Unmatched route counter metric name.
pub const METRIC_NOT_FOUND_REQUESTS: &str = "not_found_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HEALTH_REQUESTS,
        "Total number of GET /health requests served"
    );
    describe_counter!(
        METRIC_USERS_REQUESTS,
        "Total number of GET /api/users requests served"
    );
    describe_counter!(
        METRIC_NOT_FOUND_REQUESTS,
        "Total number of requests answered with 404"
    );

    debug!("Metrics initialized");
}

/// Increment the health requests counter.
pub fn inc_health_requests() {
    counter!(METRIC_HEALTH_REQUESTS).increment(1);
}

/// Increment the users requests counter.
pub fn inc_users_requests() {
    counter!(METRIC_USERS_REQUESTS).increment(1);
}

/// Increment the unmatched route counter.
pub fn inc_not_found_requests() {
    counter!(METRIC_NOT_FOUND_REQUESTS).increment(1);
}
