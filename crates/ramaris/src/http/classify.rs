//! Error-envelope classification
//!
//! Turns a non-2xx status and its body into an [`Error`]. Pure: no I/O and
//! no retry decisions.

use serde::Deserialize;

use crate::error::Error;

/// Default code for 429 responses without one.
pub const CODE_RATE_LIMITED: &str = "RATE_LIMITED";
/// Default code for 5xx responses without one.
pub const CODE_SERVER_ERROR: &str = "SERVER_ERROR";
/// Default code for any other error response without one.
pub const CODE_UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

const MESSAGE_RATE_LIMITED: &str = "rate limit exceeded";

/// Fields of an `{"error": {...}}` body.
///
/// Anything missing or malformed reads as empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Error code, empty if absent
    pub code: String,
    /// Error message, empty if absent
    pub message: String,
    /// Seconds to wait before retrying, 0 if absent
    pub retry_after: u64,
}

#[derive(Deserialize)]
struct Wire {
    #[serde(default)]
    error: Option<WireError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    retry_after: Option<i64>,
}

impl ErrorEnvelope {
    /// Read an error envelope, tolerating any body.
    pub fn parse(body: &[u8]) -> Self {
        let Ok(Wire { error: Some(error) }) = serde_json::from_slice::<Wire>(body) else {
            return Self::default();
        };

        Self {
            code: error.code.unwrap_or_default(),
            message: error.message.unwrap_or_default(),
            retry_after: error.retry_after.unwrap_or_default().max(0) as u64,
        }
    }
}

fn or_default(value: String, default: impl FnOnce() -> String) -> String {
    if value.is_empty() { default() } else { value }
}

/// Classify an error response.
///
/// - 429 becomes [`Error::RateLimited`]
/// - 5xx becomes [`Error::Api`] with code defaulting to `SERVER_ERROR`
/// - anything else becomes [`Error::Api`] with code defaulting to `UNKNOWN_ERROR`
///
/// Messages default to `HTTP <status>` (`rate limit exceeded` for 429).
pub fn classify(status: u16, body: &[u8]) -> Error {
    let envelope = ErrorEnvelope::parse(body);

    if status == 429 {
        return Error::RateLimited {
            code: or_default(envelope.code, || CODE_RATE_LIMITED.to_string()),
            message: or_default(envelope.message, || MESSAGE_RATE_LIMITED.to_string()),
            status,
            retry_after_secs: envelope.retry_after,
        };
    }

    let default_code = if status >= 500 {
        CODE_SERVER_ERROR
    } else {
        CODE_UNKNOWN_ERROR
    };

    Error::Api {
        code: or_default(envelope.code, || default_code.to_string()),
        message: or_default(envelope.message, || format!("HTTP {}", status)),
        status,
    }
}
