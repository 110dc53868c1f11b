//! Minimal read-only user directory HTTP service.
//!
//! The service exposes exactly two endpoints:
//!
//! - `GET /health` — liveness probe returning `{"status":"UP","timestamp":...}`
//! - `GET /api/users` — the fixed user dataset as a JSON array
//!
//! Every other method/path combination is answered with `404 Not Found`.
//! Handlers are stateless and share no mutable data, so any number of
//! requests can be served concurrently without coordination.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`users`]: The hardcoded user dataset
//! - [`api`]: Router and request handlers
//! - [`metrics`]: Request counters
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod users;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
