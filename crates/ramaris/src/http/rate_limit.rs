//! Rate-limit window tracking
//!
//! The server reports its quota on every response through three headers.
//! The tracker keeps the last complete reading and hands out copies.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use http::HeaderMap;

/// Header carrying the request quota for the window.
pub const HEADER_LIMIT: &str = "x-ratelimit-limit";
/// Header carrying the requests left in the window.
pub const HEADER_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the window reset time, in Unix seconds.
pub const HEADER_RESET: &str = "x-ratelimit-reset";

/// The server-reported rate-limit window, as of the last response that
/// carried all three headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    /// Requests allowed per window
    pub limit: i64,
    /// Requests left in the current window; servers may report a negative
    /// value once the window is overdrawn
    pub remaining: i64,
    /// Window reset time, Unix seconds
    pub reset_epoch_seconds: i64,
}

impl RateLimitSnapshot {
    /// Reset time as a timestamp, if it is representable.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset_epoch_seconds, 0)
    }

    /// Whether the window has no requests left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    fn from_headers(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            limit: parse_header(headers, HEADER_LIMIT)?,
            remaining: parse_header(headers, HEADER_REMAINING)?,
            reset_epoch_seconds: parse_header(headers, HEADER_RESET)?,
        })
    }
}

fn parse_header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// Shared holder of the latest [`RateLimitSnapshot`].
///
/// `None` until a response carries a complete, integer-valued header triple.
/// Incomplete or malformed triples leave the previous snapshot in place.
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    snapshot: RwLock<Option<RateLimitSnapshot>>,
}

impl RateLimitTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window from a response's headers.
    pub fn update(&self, headers: &HeaderMap) {
        let Some(snapshot) = RateLimitSnapshot::from_headers(headers) else {
            return;
        };

        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(snapshot);

        tracing::trace!(
            limit = snapshot.limit,
            remaining = snapshot.remaining,
            reset = snapshot.reset_epoch_seconds,
            "Rate limit window updated"
        );
    }

    /// Copy of the latest snapshot.
    pub fn current(&self) -> Option<RateLimitSnapshot> {
        *self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(RateLimitTracker::new().current(), None);
    }

    #[test]
    fn test_update_with_complete_triple() {
        let tracker = RateLimitTracker::new();
        tracker.update(&headers(&[
            ("X-RateLimit-Limit", "100"),
            ("X-RateLimit-Remaining", "95"),
            ("X-RateLimit-Reset", "1700000000"),
        ]));

        let snapshot = tracker.current().unwrap();
        assert_eq!(snapshot.limit, 100);
        assert_eq!(snapshot.remaining, 95);
        assert_eq!(snapshot.reset_epoch_seconds, 1_700_000_000);
        assert!(!snapshot.is_exhausted());
        assert_eq!(
            snapshot.reset_at(),
            DateTime::from_timestamp(1_700_000_000, 0)
        );
    }

    #[test]
    fn test_missing_header_keeps_previous() {
        let tracker = RateLimitTracker::new();
        tracker.update(&headers(&[
            ("x-ratelimit-limit", "100"),
            ("x-ratelimit-remaining", "1"),
            ("x-ratelimit-reset", "42"),
        ]));
        tracker.update(&headers(&[
            ("x-ratelimit-limit", "100"),
            ("x-ratelimit-remaining", "0"),
        ]));

        assert_eq!(tracker.current().unwrap().remaining, 1);
    }

    #[test]
    fn test_non_integer_header_is_ignored() {
        let tracker = RateLimitTracker::new();
        tracker.update(&headers(&[
            ("x-ratelimit-limit", "lots"),
            ("x-ratelimit-remaining", "5"),
            ("x-ratelimit-reset", "42"),
        ]));

        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_negative_remaining_is_recorded() {
        let tracker = RateLimitTracker::new();
        tracker.update(&headers(&[
            ("X-RateLimit-Limit", "100"),
            ("X-RateLimit-Remaining", "-1"),
            ("X-RateLimit-Reset", "1700000000"),
        ]));

        let snapshot = tracker.current().unwrap();
        assert_eq!(snapshot.limit, 100);
        assert_eq!(snapshot.remaining, -1);
        assert_eq!(snapshot.reset_epoch_seconds, 1_700_000_000);
        assert!(snapshot.is_exhausted());
    }

    #[test]
    fn test_exhausted_window() {
        let snapshot = RateLimitSnapshot {
            limit: 10,
            remaining: 0,
            reset_epoch_seconds: 0,
        };
        assert!(snapshot.is_exhausted());
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let tracker = std::sync::Arc::new(RateLimitTracker::new());

        let poisoner = tracker.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.snapshot.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        tracker.update(&headers(&[
            ("x-ratelimit-limit", "5"),
            ("x-ratelimit-remaining", "4"),
            ("x-ratelimit-reset", "9"),
        ]));
        assert_eq!(tracker.current().unwrap().remaining, 4);
    }
}
