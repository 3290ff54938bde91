//! Exponential backoff schedule.

use std::time::Duration;

/// Deterministic exponential backoff.
///
/// The delay after the `n`-th failed attempt (0-indexed) is
/// `initial_delay * multiplier^n`, capped at `max_delay`. There is no jitter:
/// the schedule for the defaults is exactly 500ms, 1s, 2s, ...
///
/// `max_attempts` counts every attempt including the first one, so a value of
/// 3 allows at most two waits.
///
/// # Examples
///
/// ```rust
/// use ramaris_core::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::default();
/// assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(500)));
/// assert_eq!(backoff.next_delay(1), Some(Duration::from_secs(1)));
/// assert_eq!(backoff.next_delay(2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// Total number of attempts allowed, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after `attempt` (0-indexed) failed.
    ///
    /// Returns `None` when `attempt` was the last one allowed.
    pub fn next_delay(&self, attempt: u32) -> Option<Duration> {
        if attempt.saturating_add(1) >= self.max_attempts {
            return None;
        }

        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let scaled = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = scaled.min(self.max_delay.as_secs_f64());

        Some(Duration::from_secs_f64(capped.max(0.0)))
    }
}

impl Default for ExponentialBackoff {
    /// Defaults: 3 attempts, 500ms initial delay, doubling, capped at 60s.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
        }
    }
}

/// Builder for configuring [`ExponentialBackoff`].
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_attempts: Option<u32>,
    initial_delay: Option<Duration>,
    max_delay: Option<Duration>,
    multiplier: Option<f64>,
}

impl ExponentialBackoffBuilder {
    /// Set the total number of attempts (including the first).
    ///
    /// Default: 3. Values below 1 are raised to 1.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Set the delay before the first retry.
    ///
    /// Default: 500ms
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the upper bound for any single delay.
    ///
    /// Default: 60s
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Set the growth factor between consecutive delays.
    ///
    /// Default: 2.0
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Build the backoff schedule.
    pub fn build(self) -> ExponentialBackoff {
        let defaults = ExponentialBackoff::default();
        ExponentialBackoff {
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            initial_delay: self.initial_delay.unwrap_or(defaults.initial_delay),
            max_delay: self.max_delay.unwrap_or(defaults.max_delay),
            multiplier: self.multiplier.unwrap_or(defaults.multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_schedule() {
        let backoff = ExponentialBackoff::default();

        assert_eq!(backoff.max_attempts(), 3);
        assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(500)));
        assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(1000)));
        assert_eq!(backoff.next_delay(2), None);
    }

    #[test]
    fn test_builder_overrides() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(5)
            .initial_delay(Duration::from_millis(125))
            .multiplier(4.0)
            .build();

        assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(125)));
        assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(500)));
        assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(2)));
        assert_eq!(backoff.next_delay(4), None);
    }

    #[test]
    fn test_max_delay_caps_growth() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(10)
            .initial_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(4))
            .build();

        assert_eq!(backoff.next_delay(1), Some(Duration::from_secs(2)));
        assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(4)));
        assert_eq!(backoff.next_delay(6), Some(Duration::from_secs(4)));
    }

    #[test]
    fn test_single_attempt_never_waits() {
        let backoff = ExponentialBackoff::builder().max_attempts(0).build();

        assert_eq!(backoff.max_attempts(), 1);
        assert_eq!(backoff.next_delay(0), None);
    }

    proptest! {
        /// Delays never shrink from one retry to the next.
        #[test]
        fn prop_delays_are_monotonic(attempt in 0u32..8) {
            let backoff = ExponentialBackoff::builder().max_attempts(10).build();
            let current = backoff.next_delay(attempt).unwrap();
            let next = backoff.next_delay(attempt + 1).unwrap();
            prop_assert!(next >= current);
        }
    }
}
