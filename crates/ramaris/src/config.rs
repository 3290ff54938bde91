//! Configuration for the Ramaris client

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ramaris_transport::Transport;
use secrecy::{ExposeSecret, SecretString};

use crate::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "RAMARIS_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "RAMARIS_BASE_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT: &str = "RAMARIS_TIMEOUT";

/// Configuration for the Ramaris client.
///
/// Every field is applied once, when the client is built. A client never
/// changes its credential, base URL or transport afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as a bearer credential
    pub api_key: Option<SecretString>,

    /// Base URL for the API, without a trailing slash
    pub base_url: Option<String>,

    /// Timeout for a single round-trip, including reading the body
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// `User-Agent` header value
    pub user_agent: Option<String>,

    /// Custom transport; when set, `timeout` and `connect_timeout` are the
    /// transport's business
    pub transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
            transport: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("transport", &self.transport.as_ref().map(|t| t.name()))
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `RAMARIS_API_KEY` for authentication
    /// - `RAMARIS_BASE_URL` for the API base URL
    /// - `RAMARIS_TIMEOUT` for request timeout (in seconds)
    ///
    /// Missing variables leave the defaults in place; validation happens when
    /// the client is built.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `RAMARIS_TIMEOUT` is set but is not
    /// a whole number of seconds.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let mut config = Self::default();

        if let Ok(api_key) = env::var(ENV_API_KEY) {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var(ENV_TIMEOUT) {
            let secs = timeout_str.trim().parse::<u64>().map_err(|_| {
                Error::InvalidRequest(format!(
                    "{} must be a number of seconds, got '{}'",
                    ENV_TIMEOUT, timeout_str
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Load a `.env` file from the current directory (if any), then read the
    /// environment like [`ClientConfig::from_env`].
    ///
    /// Variables already present in the process environment win over the file.
    #[cfg(feature = "env")]
    pub fn from_dotenv() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
        Self::from_env()
    }

    /// Base URL with any trailing slash removed, defaulting to the public API.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// `User-Agent` header value, defaulting to `ramaris-rust/<version>`.
    pub fn resolved_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("ramaris-rust/{}", crate::VERSION))
    }

    /// Check the configuration and return the credential to use.
    ///
    /// With the `env` feature, a missing key falls back to `RAMARIS_API_KEY`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] if no non-empty API key is available
    /// - [`Error::InvalidUrl`] if the base URL is empty, unparsable or not http(s)
    pub fn validate(&self) -> Result<SecretString> {
        validate_base_url(self.resolved_base_url())?;

        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => api_key_from_env()?,
        };

        if api_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingConfig("API key is empty".to_string()));
        }

        Ok(api_key)
    }
}

#[cfg(feature = "env")]
fn api_key_from_env() -> Result<SecretString> {
    std::env::var(ENV_API_KEY)
        .map(|key| SecretString::new(key.into_boxed_str()))
        .map_err(|_| {
            Error::MissingConfig(format!(
                "API key not provided and {} is not set",
                ENV_API_KEY
            ))
        })
}

#[cfg(not(feature = "env"))]
fn api_key_from_env() -> Result<SecretString> {
    Err(Error::MissingConfig("API key not provided".to_string()))
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::InvalidUrl("base URL is empty".to_string()));
    }

    let parsed = url::Url::parse(base_url)
        .map_err(|e| Error::InvalidUrl(format!("'{}': {}", base_url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::InvalidUrl(format!(
            "unsupported scheme '{}' in '{}', expected http or https",
            other, base_url
        ))),
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
