//! Structured logging for the request pipeline
//!
//! Every API call is logged through this layer so field names stay the same
//! across endpoints: `method`, `path`, `status`, `elapsed_ms`, `retries`.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (always GET today)
    pub method: &'static str,
    /// Request path, relative to the base URL
    pub path: String,
    /// 1-based attempt number
    pub attempt: u32,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: &'static str, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            attempt: 1,
        }
    }

    /// Set the attempt number
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = self.method,
            path = %self.path,
            attempt = self.attempt,
            "Sending HTTP request"
        );
    }

    /// Log a retry being scheduled after a server error
    pub fn log_retry(&self, status: u16, delay: Duration) {
        warn!(
            method = self.method,
            path = %self.path,
            attempt = self.attempt,
            status,
            delay_ms = delay.as_millis() as u64,
            "Server error, retrying after backoff"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code, if a response was received
    pub status: Option<u16>,
    /// Response body size in bytes
    pub body_size: Option<usize>,
    /// Time elapsed for the whole call, retries and backoff included
    pub elapsed: Duration,
    /// Number of retries taken
    pub retries: u32,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(elapsed: Duration) -> Self {
        Self {
            status: None,
            body_size: None,
            elapsed,
            retries: 0,
        }
    }

    /// Set the status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Set the number of retries
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Log successful response
    pub fn log_success(&self, request: &RequestMetadata) {
        info!(
            method = request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            body_size = self.body_size,
            retries = self.retries,
            "HTTP request succeeded"
        );
    }

    /// Log failed call
    pub fn log_error(&self, request: &RequestMetadata, error: &dyn std::error::Error) {
        warn!(
            method = request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            error = %error,
            retries = self.retries,
            "HTTP request failed"
        );
    }
}

/// Timer for measuring request duration
///
/// Uses tokio's clock, so paused-time tests see backoff in `elapsed()`.
#[derive(Debug)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `tracing-subscriber` formatter driven by `RUST_LOG`.
///
/// Convenience for binaries and examples; libraries embedding the SDK should
/// install their own subscriber. Calling it twice is harmless.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ramaris=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
