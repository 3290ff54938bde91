//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Failures where no HTTP response was obtained.
///
/// A response with an error status is *not* a transport error; status
/// interpretation belongs to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not establish a connection (DNS, refused, TLS handshake)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request or connect timeout elapsed
    #[error("Timeout")]
    Timeout,

    /// Request could not be built or sent
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be read to completion
    #[error("Body error: {0}")]
    Body(String),

    /// Header name or value rejected before sending
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// Whether the failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TransportError::Timeout.to_string(), "Timeout");
        assert_eq!(
            TransportError::Connection("refused".to_string()).to_string(),
            "Connection error: refused"
        );
    }

    #[test]
    fn test_is_timeout() {
        assert!(TransportError::Timeout.is_timeout());
        assert!(!TransportError::Http("bad".to_string()).is_timeout());
    }

    #[test]
    fn test_from_io_error() {
        let err: TransportError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, TransportError::Io(_)));
    }
}
