//! HTTP request pipeline
//!
//! This module provides the HTTP layer for the SDK: the executor every
//! resource call goes through, the rate-limit tracker it feeds, and the
//! classifier that turns error responses into [`crate::Error`] values.

pub mod classify;
pub mod executor;
pub mod rate_limit;

pub use classify::{ErrorEnvelope, classify};
pub use executor::{RequestExecutor, RequestSpec};
pub use rate_limit::{RateLimitSnapshot, RateLimitTracker};

// Re-export HTTP types from the http crate for convenience
pub use ::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
