//! Retry schedules and cancellable waits.
//!
//! # Key Types
//!
//! - [`ExponentialBackoff`] - deterministic doubling delay schedule
//! - [`sleep_or_cancel`] - a delay that a [`CancellationToken`] can cut short
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod exponential;
mod wait;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use wait::{WaitOutcome, sleep_or_cancel};
