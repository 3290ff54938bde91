//! Main client implementation for the Ramaris API

use std::sync::Arc;
use std::time::Duration;

use ramaris_core::CancellationToken;
use ramaris_transport::{HttpTransport, HttpTransportConfig, Transport};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tokio_util::sync::DropGuard;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::{RateLimitSnapshot, RateLimitTracker, RequestExecutor, RequestSpec},
    resources::{Health, Me, Strategies, Wallets},
    types::{DataEnvelope, HealthStatus},
};

/// Main client for interacting with the Ramaris API.
///
/// Cloning is cheap: clones share the transport, the credential and the
/// rate-limit tracker.
///
/// # Example
///
/// ```rust,no_run
/// use ramaris::Client;
///
/// # async fn example() -> ramaris::Result<()> {
/// let client = Client::new("rms_...");
/// let health = client.health().await?;
/// println!("API {} (v{})", health.status, health.version);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
    cancel: CancellationToken,
    /// Stops the `with_deadline` timer once the last clone sharing it drops
    deadline_timer: Option<Arc<DropGuard>>,
}

struct ClientInner {
    executor: RequestExecutor,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("executor", &self.inner.executor)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl Client {
    /// Create a new client with an API key.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the default
    /// configuration. For fallible construction with explicit error handling, use
    /// [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ramaris::Client;
    ///
    /// let client = Client::new("rms_...");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("Failed to build client with provided API key")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is empty
    /// - The base URL is invalid (e.g., from environment variable)
    /// - The default HTTP transport cannot be initialized
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from `RAMARIS_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api_key = config.validate()?;
        let base_url = config.resolved_base_url().to_string();
        let user_agent = config.resolved_user_agent();

        let transport: Arc<dyn Transport> = match config.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::with_config(HttpTransportConfig {
                timeout: config.timeout,
                connect_timeout: config.connect_timeout,
                user_agent: Some(user_agent.clone()),
                ..Default::default()
            })?),
        };

        let executor = RequestExecutor::new(
            base_url,
            &api_key,
            &user_agent,
            transport,
            Arc::new(RateLimitTracker::new()),
        )?;

        tracing::debug!(
            base_url = %executor.base_url(),
            transport = executor.transport_name(),
            "Ramaris client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner { executor }),
            cancel: CancellationToken::new(),
            deadline_timer: None,
        })
    }

    /// A clone whose calls are aborted when `token` is cancelled.
    ///
    /// The clone shares the transport and rate-limit tracker with `self`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use ramaris::{CancellationToken, Client};
    ///
    /// # async fn example(client: Client) -> ramaris::Result<()> {
    /// let token = CancellationToken::new();
    /// let bounded = client.with_cancellation(token.clone());
    ///
    /// // Give up after 15 seconds, retries and backoff included.
    /// let guard = token.clone().drop_guard();
    /// tokio::spawn(async move {
    ///     tokio::time::sleep(Duration::from_secs(15)).await;
    ///     drop(guard);
    /// });
    ///
    /// let strategies = bounded.strategies().list(None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: token,
            deadline_timer: None,
        }
    }

    /// A clone that gives up after `timeout`, measured from this call.
    ///
    /// Covers the whole call including retries and backoff, unlike the
    /// transport timeout which bounds a single round-trip. Cancelling this
    /// client's own token also cancels the clone.
    ///
    /// The timer runs in a background task that exits when the deadline
    /// fires, the token is cancelled, or the returned client and all of its
    /// clones are dropped. Dropping the client does not cancel the token.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_deadline(&self, timeout: Duration) -> Self {
        let token = self.cancel.child_token();
        let timer = token.clone();
        let stop = CancellationToken::new();
        let stopped = stop.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(timeout) => timer.cancel(),
                _ = timer.cancelled() => {}
                _ = stopped.cancelled() => {}
            }
        });

        Self {
            inner: Arc::clone(&self.inner),
            cancel: token,
            deadline_timer: Some(Arc::new(stop.drop_guard())),
        }
    }

    /// The token calls made through this client observe.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The most recent rate-limit window, or `None` before any response
    /// carried the rate-limit headers.
    pub fn rate_limit(&self) -> Option<RateLimitSnapshot> {
        self.inner.executor.rate_limit().current()
    }

    /// Base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        self.inner.executor.base_url()
    }

    /// Check API health and authentication.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.health_resource().get().await
    }

    /// Access the health endpoint.
    pub fn health_resource(&self) -> Health<'_> {
        Health::new(self)
    }

    /// Access the Strategies API endpoints.
    pub fn strategies(&self) -> Strategies<'_> {
        Strategies::new(self)
    }

    /// Access the Wallets API endpoints.
    pub fn wallets(&self) -> Wallets<'_> {
        Wallets::new(self)
    }

    /// Access the endpoints scoped to the authenticated user.
    pub fn me(&self) -> Me<'_> {
        Me::new(self)
    }

    /// Execute `spec` and decode the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let response = self.inner.executor.execute(&spec, &self.cancel).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!(path = %spec.path, error = %e, "Response body did not match expected shape");
            Error::decode(e)
        })
    }

    /// Execute `spec` and decode a `{"data": T}` body.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        self.get_json::<DataEnvelope<T>>(spec)
            .await
            .map(DataEnvelope::into_inner)
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout of the default transport.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
