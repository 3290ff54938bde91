//! Request execution pipeline
//!
//! Every API call goes through [`RequestExecutor::execute`]: URL
//! construction, authentication, transport dispatch, rate-limit capture,
//! error classification and bounded retry of server errors.

use std::sync::Arc;

use ::http::{HeaderMap, HeaderValue, header};
use ramaris_core::retry::{ExponentialBackoff, WaitOutcome, sleep_or_cancel};
use ramaris_core::CancellationToken;
use ramaris_transport::{HttpRequest, HttpResponse, Transport};
use secrecy::{ExposeSecret, SecretString};

use super::classify::classify;
use super::rate_limit::RateLimitTracker;
use crate::error::{Error, Result};
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata};
use crate::types::ListOptions;

/// One logical API call: a path relative to the base URL plus optional paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Path beginning with `/`
    pub path: String,
    /// Page selection for list endpoints
    pub query: Option<ListOptions>,
}

impl RequestSpec {
    /// Request for `path` without a query string.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    /// Attach paging options.
    pub fn with_query(mut self, query: Option<&ListOptions>) -> Self {
        self.query = query.copied();
        self
    }
}

/// Sends authenticated `GET` requests and turns responses into results.
///
/// Retries only 5xx responses, up to three attempts in total, waiting 500ms
/// and then 1s between them. Rate-limit rejections (429), other error
/// statuses and transport failures are returned on the spot.
pub struct RequestExecutor {
    base_url: String,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
    rate_limit: Arc<RateLimitTracker>,
    backoff: ExponentialBackoff,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.name())
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    /// Create an executor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the API key or user agent cannot be
    /// sent as an HTTP header value.
    pub fn new(
        base_url: impl Into<String>,
        api_key: &SecretString,
        user_agent: &str,
        transport: Arc<dyn Transport>,
        rate_limit: Arc<RateLimitTracker>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::with_capacity(3);

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret())).map_err(|_| {
                Error::InvalidRequest("API key contains characters not allowed in a header".into())
            })?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = HeaderValue::from_str(user_agent).map_err(|_| {
            Error::InvalidRequest(format!("invalid User-Agent header value '{}'", user_agent))
        })?;
        headers.insert(header::USER_AGENT, user_agent);

        Ok(Self {
            base_url: base_url.into(),
            headers,
            transport,
            rate_limit,
            backoff: ExponentialBackoff::default(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared rate-limit tracker this executor writes to.
    pub fn rate_limit(&self) -> &Arc<RateLimitTracker> {
        &self.rate_limit
    }

    /// Name of the underlying transport.
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Absolute URL for a request: base + path, then `page` and `pageSize`
    /// when positive.
    pub fn build_url(&self, spec: &RequestSpec) -> String {
        let mut url = format!("{}{}", self.base_url, spec.path);

        let pairs = spec.query.map(|q| q.query_pairs()).unwrap_or_default();
        if !pairs.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Run one API call to completion.
    ///
    /// Returns the 2xx response with its body untouched. Cancelling `cancel`
    /// aborts an in-flight request or a pending backoff with
    /// [`Error::Cancelled`].
    pub async fn execute(
        &self,
        spec: &RequestSpec,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse> {
        let url = self.build_url(spec);
        let timer = RequestTimer::start();
        let max_attempts = self.backoff.max_attempts();

        for attempt in 0..max_attempts {
            let meta = RequestMetadata::new("GET", spec.path.as_str()).with_attempt(attempt + 1);

            let mut request = HttpRequest::get(url.as_str());
            request.headers = self.headers.clone();

            meta.log_request();
            let sent = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    return Err(self.fail(&meta, &timer, attempt, None, Error::Cancelled));
                }
                sent = self.transport.send(request) => sent,
            };

            let response = match sent {
                Ok(response) => response,
                Err(e) => return Err(self.fail(&meta, &timer, attempt, None, e.into())),
            };

            self.rate_limit.update(&response.headers);
            let status = response.status;

            if response.is_success() {
                ResponseMetadata::new(timer.elapsed())
                    .with_status(status)
                    .with_body_size(response.body.len())
                    .with_retries(attempt)
                    .log_success(&meta);
                return Ok(response);
            }

            if response.is_server_error()
                && let Some(delay) = self.backoff.next_delay(attempt)
            {
                meta.log_retry(status, delay);
                match sleep_or_cancel(delay, cancel).await {
                    WaitOutcome::Elapsed => continue,
                    WaitOutcome::Cancelled => {
                        return Err(self.fail(&meta, &timer, attempt, Some(status), Error::Cancelled));
                    }
                }
            }

            let err = classify(status, &response.body);
            return Err(self.fail(&meta, &timer, attempt, Some(status), err));
        }

        Err(Error::RetriesExhausted)
    }

    fn fail(
        &self,
        meta: &RequestMetadata,
        timer: &RequestTimer,
        retries: u32,
        status: Option<u16>,
        err: Error,
    ) -> Error {
        let mut response = ResponseMetadata::new(timer.elapsed()).with_retries(retries);
        if let Some(status) = status {
            response = response.with_status(status);
        }
        response.log_error(meta, &err);
        err
    }
}
