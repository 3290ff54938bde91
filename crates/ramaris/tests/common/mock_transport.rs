//! Mock transport for testing without a network
//!
//! Replays a script of responses, records every request with the (tokio)
//! time it was sent, and can hang forever to exercise cancellation.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use ramaris::{HttpRequest, HttpResponse, Transport, TransportError};
use tokio::sync::Mutex;
use tokio::time::Instant;

/// One scripted outcome of `send`
pub enum Scripted {
    /// Return this response
    Response(HttpResponse),
    /// Fail without a response
    Error(TransportError),
    /// Never complete
    Hang,
}

/// A request as the transport saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// The request itself
    pub request: HttpRequest,
    /// When it was sent, on tokio's clock
    pub at: Instant,
}

/// A scripted transport for testing the request pipeline in isolation
///
/// # Examples
///
/// ```rust,ignore
/// let transport = MockTransport::new();
/// transport.push_json(503, "{}").await;
/// transport.push_json(200, r#"{"status":"ok"}"#).await;
///
/// let client = common::client_with(&transport);
/// // ... call the client, then
/// assert_eq!(transport.call_count().await, 2);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Outcomes to replay, in FIFO order
    script: Arc<Mutex<VecDeque<Scripted>>>,

    /// Requests received (for assertion)
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a transport with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome
    pub async fn push(&self, outcome: Scripted) {
        self.script.lock().await.push_back(outcome);
    }

    /// Queue a response with a JSON body
    pub async fn push_json(&self, status: u16, body: &str) {
        self.push(Scripted::Response(json_response(status, body, HeaderMap::new())))
            .await;
    }

    /// Queue a response with a JSON body and extra headers
    pub async fn push_json_with_headers(&self, status: u16, body: &str, headers: &[(&str, &str)]) {
        self.push(Scripted::Response(json_response(status, body, header_map(headers))))
            .await;
    }

    /// Queue a transport failure
    pub async fn push_error(&self, error: TransportError) {
        self.push(Scripted::Error(error)).await;
    }

    /// Queue a request that never completes
    pub async fn push_hang(&self) {
        self.push(Scripted::Hang).await;
    }

    /// Number of `send` calls so far
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// All requests received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ramaris_transport::Result<HttpResponse> {
        self.requests.lock().await.push(RecordedRequest {
            request,
            at: Instant::now(),
        });

        let next = self.script.lock().await.pop_front();
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Error(error)) => Err(error),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(TransportError::Http("mock script exhausted".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Build a JSON response
pub fn json_response(status: u16, body: &str, mut headers: HeaderMap) -> HttpResponse {
    headers.insert(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    HttpResponse::new(status, headers, Bytes::from(body.to_string()))
}

/// Build a header map from name/value pairs
pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes()).expect("valid header name"),
            HeaderValue::from_str(value).expect("valid header value"),
        );
    }
    headers
}
