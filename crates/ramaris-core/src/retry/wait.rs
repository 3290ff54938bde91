//! Cancellable delay.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How a [`sleep_or_cancel`] wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full delay elapsed.
    Elapsed,
    /// The token was cancelled before the delay elapsed.
    Cancelled,
}

/// Sleep for `delay` unless `token` is cancelled first.
///
/// Cancellation always wins: an already-cancelled token returns
/// [`WaitOutcome::Cancelled`] without sleeping, even for a zero delay.
pub async fn sleep_or_cancel(delay: Duration, token: &CancellationToken) -> WaitOutcome {
    tokio::select! {
        biased;
        () = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(delay_ms = delay.as_millis(), "Wait cancelled");
            WaitOutcome::Cancelled
        }
        () = tokio::time::sleep(delay) => WaitOutcome::Elapsed,
    }
}
