//! # Ramaris SDK
//!
//! Async Rust SDK for the Ramaris strategy and wallet analytics API:
//! - Bearer-key authentication
//! - Typed models for strategies, wallets, watchlist, profile and subscription
//! - Page-by-page listing with `page` / `pageSize`
//! - Rate-limit window tracking from response headers
//! - Automatic retry of server errors with exponential backoff
//! - Cancellation through [`CancellationToken`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ramaris::{Client, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("rms_your_api_key");
//!
//!     let health = client.health().await?;
//!     println!("API Status: {} (v{})", health.status, health.version);
//!
//!     let page = client
//!         .strategies()
//!         .list(Some(&ListOptions::new().page(1).page_size(5)))
//!         .await?;
//!     for strategy in &page.data {
//!         println!("{}: ROI {:?}", strategy.name, strategy.roi_percent);
//!     }
//!
//!     if let Some(rl) = client.rate_limit() {
//!         println!("{}/{} requests left", rl.remaining, rl.limit);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use crate::http::{RateLimitSnapshot, RequestSpec};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use ramaris_core::CancellationToken;
pub use ramaris_transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use ramaris::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        CancellationToken, Client, ClientConfig, Error, RateLimitSnapshot, Result,
        types::{ListOptions, ListResponse},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.ramaris.app/api/v1";


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "https://www.ramaris.app/api/v1");
    }
}
