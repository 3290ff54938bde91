//! API resource endpoints
//!
//! One resource per endpoint group. Resources borrow the [`Client`] they were
//! obtained from, so they inherit its cancellation token.

pub mod health;
pub mod me;
pub mod strategies;
pub mod wallets;

pub use health::Health;
pub use me::Me;
pub use strategies::Strategies;
pub use wallets::Wallets;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
