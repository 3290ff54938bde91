//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a pooled reqwest client. One call
//! to [`Transport::send`] is exactly one network round-trip.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;

/// HTTP transport implementation
///
/// Handles HTTP requests with:
/// - Connection pooling
/// - Request and connect timeouts
/// - Whole-body buffering before returning
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Request timeout this transport was built with
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            "sending request"
        );

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Body(e.to_string())
            }
        })?;

        tracing::debug!(status, body_len = body.len(), "received response");

        Ok(HttpResponse::new(status, headers, body))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Request timeout, covering connect through the last body byte
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Default `User-Agent`; a header set on the request wins
    pub user_agent: Option<String>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 10,
            user_agent: None,
        }
    }
}
