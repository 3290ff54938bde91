//! Error types for the Ramaris SDK
//!
//! Every failed call produces exactly one [`Error`]. API failures carry the
//! server's error code and message; everything else says which stage of the
//! request pipeline gave up.

use std::time::Duration;

use ramaris_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with a Ramaris SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Ramaris SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-2xx status other than 429.
    #[error("ramaris: {code}: {message}")]
    Api {
        /// Machine-readable error code (e.g. `NOT_FOUND`)
        code: String,
        /// Human-readable message
        message: String,
        /// HTTP status code
        status: u16,
    },

    /// The API rejected the request with 429. Never retried automatically.
    #[error("ramaris: {code}: {message} (retry after {retry_after_secs}s)")]
    RateLimited {
        /// Machine-readable error code, `RATE_LIMITED` unless the server says otherwise
        code: String,
        /// Human-readable message
        message: String,
        /// Always 429
        status: u16,
        /// Seconds the server asked us to wait, 0 if it did not say
        retry_after_secs: u64,
    },

    /// No response was received (connection, timeout, unreadable body).
    #[error("ramaris: request failed: {0}")]
    Transport(#[from] TransportError),

    /// The caller's cancellation token fired before the call completed.
    #[error("ramaris: request cancelled")]
    Cancelled,

    /// The retry loop ran out without reaching a terminal outcome.
    #[error("ramaris: max retries exceeded")]
    RetriesExhausted,

    /// A 2xx body did not match the expected shape.
    #[error("ramaris: failed to decode response: {message}")]
    Decode {
        /// Decoder error text
        message: String,
    },

    /// Invalid base URL.
    #[error("ramaris: invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing required configuration.
    #[error("ramaris: missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid request parameters, rejected before any I/O.
    #[error("ramaris: invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Build a decode error from a serde failure.
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }

    /// HTTP status for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::RateLimited { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error code for errors that came from a response.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } | Error::RateLimited { code, .. } => Some(code),
            _ => None,
        }
    }

    /// How long the server asked us to back off, for rate-limit errors.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited {
                retry_after_secs, ..
            } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }

    /// Check if this error is a rate limit rejection.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Check if the call was abandoned because the caller cancelled it.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Check if the failure happened below HTTP (no response received).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            code: "NOT_FOUND".to_string(),
            message: "Strategy not found".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "ramaris: NOT_FOUND: Strategy not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("NOT_FOUND"));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_rate_limited_display() {
        let err = Error::RateLimited {
            code: "RATE_LIMITED".to_string(),
            message: "Too many requests".to_string(),
            status: 429,
            retry_after_secs: 30,
        };
        assert_eq!(
            err.to_string(),
            "ramaris: RATE_LIMITED: Too many requests (retry after 30s)"
        );
        assert!(err.is_rate_limited());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_non_response_errors_have_no_status() {
        let errors = [
            Error::Cancelled,
            Error::RetriesExhausted,
            Error::Transport(TransportError::Timeout),
            Error::Decode {
                message: "expected value".to_string(),
            },
            Error::InvalidRequest("share id is empty".to_string()),
        ];

        for err in &errors {
            assert_eq!(err.status(), None, "{err}");
            assert_eq!(err.code(), None, "{err}");
        }
    }

    #[test]
    fn test_predicates() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::RetriesExhausted.is_cancelled());

        let err: Error = TransportError::Connection("refused".to_string()).into();
        assert!(err.is_transport());
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = Error::decode(serde_err);
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().starts_with("ramaris: failed to decode response:"));
    }
}
