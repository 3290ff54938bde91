//! Health check types

use serde::{Deserialize, Serialize};

/// Rate limit configuration of the calling key, as reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRateLimit {
    /// Requests allowed per window
    pub limit: u64,
    /// Visible prefix of the API key
    pub key_prefix: String,
}

/// API health check response. Returned as a bare object, not wrapped in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// `ok` when healthy
    pub status: String,
    /// Server version
    pub version: String,
    /// Server time, as sent
    pub timestamp: String,
    /// Identifier of the user owning the key
    pub user: String,
    /// Key rate limit configuration
    pub rate_limit: HealthRateLimit,
}

impl HealthStatus {
    /// Whether the server reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
