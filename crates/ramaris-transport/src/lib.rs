//! Transport abstraction layer for the Ramaris SDK
//!
//! The SDK never talks to the network directly. Every request goes through a
//! [`Transport`], so callers can swap the default reqwest-backed
//! [`HttpTransport`] for a proxying, recording or in-memory implementation.
//!
//! # Architecture
//!
//! - **Transport trait**: one round-trip, no retries, no status interpretation
//! - **HTTP transport**: reqwest client with request and connect timeouts
//! - **Error handling**: [`TransportError`] covers only failures where no
//!   response was received

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # Usage
//!
//! ```no_run
//! use ramaris_transport::{HttpRequest, HttpTransport, Transport};
//!
//! # async fn example() -> ramaris_transport::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::get("https://www.ramaris.app/api/v1/health")
//!     .with_header("accept", "application/json")?;
//! let response = transport.send(request).await?;
//! println!("status: {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use crate::http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
