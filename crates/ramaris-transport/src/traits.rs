//! Transport trait and request/response types
//!
//! Defines the [`Transport`] trait that the SDK's request pipeline dispatches
//! through, and the plain request/response values passed across it.

use crate::error::{Result, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

/// HTTP request specification
///
/// Represents an HTTP request to be sent via the Transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,

    /// Absolute request URL
    pub url: String,

    /// Request headers
    pub headers: HeaderMap,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a new `GET` request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Add a header to the request, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidHeader`] if the name or value contains
    /// characters not allowed in HTTP headers.
    pub fn with_header(mut self, key: &str, value: &str) -> Result<Self> {
        let (name, value) = parse_header(key, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add a header whose value must not show up in logs
    ///
    /// # Errors
    ///
    /// Same as [`HttpRequest::with_header`].
    pub fn with_sensitive_header(mut self, key: &str, value: &str) -> Result<Self> {
        let (name, mut value) = parse_header(key, value)?;
        value.set_sensitive(true);
        self.headers.insert(name, value);
        Ok(self)
    }
}

fn parse_header(key: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| TransportError::InvalidHeader(format!("name '{}': {}", key, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| TransportError::InvalidHeader(format!("value for '{}': {}", key, e)))?;
    Ok((name, value))
}

/// HTTP response
///
/// Represents an HTTP response received from the server, with the body
/// already read to completion.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers (lookups are case-insensitive)
    pub headers: HeaderMap,

    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// Get a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the response body as lossy UTF-8, for diagnostics
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Generic transport for a single HTTP round-trip
///
/// Implementations must not retry and must not interpret status codes: any
/// response the server produced is returned as `Ok`. Only failures where no
/// response exists (connection, timeout, unreadable body) are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and receive a response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Short name for logging
    fn name(&self) -> &'static str {
        "custom"
    }
}
