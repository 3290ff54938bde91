#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core primitives shared by the Ramaris crates.
//!
//! - **Backoff schedules** via [`retry::ExponentialBackoff`]
//! - **Cancellable delays** via [`retry::sleep_or_cancel`], which resolves to
//!   either [`retry::WaitOutcome::Elapsed`] or [`retry::WaitOutcome::Cancelled`]
//!
//! # Examples
//!
//! ```rust
//! use ramaris_core::prelude::*;
//! use ramaris_core::CancellationToken;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .initial_delay(Duration::from_millis(500))
//!     .build();
//!
//! let token = CancellationToken::new();
//! if let Some(delay) = backoff.next_delay(0) {
//!     match sleep_or_cancel(delay, &token).await {
//!         WaitOutcome::Elapsed => { /* retry */ }
//!         WaitOutcome::Cancelled => { /* give up */ }
//!     }
//! }
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
pub mod prelude {
    pub use crate::retry::{
        ExponentialBackoff, ExponentialBackoffBuilder, WaitOutcome, sleep_or_cancel,
    };
}

pub use tokio_util::sync::CancellationToken;
