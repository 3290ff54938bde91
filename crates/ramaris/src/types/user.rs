//! Authenticated user types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate stats for the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileStats {
    /// Strategies this user created
    pub strategies_created: u64,
    /// Wallets this user follows
    pub wallets_followed: u64,
    /// Strategies this user follows
    pub strategies_followed: u64,
}

/// The authenticated user's profile, from `GET /me/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Public nickname
    pub nickname: Option<String>,
    /// Full name
    pub name: Option<String>,
    /// Account email
    pub email: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Founder program member
    pub is_founder: bool,
    /// Aggregate stats
    pub stats: UserProfileStats,
}

/// The authenticated user's subscription, from `GET /me/subscription`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Plan tier (e.g. `FREE`, `PRO`)
    pub tier: String,
    /// Billing status (e.g. `active`)
    pub status: String,
    /// End of the current billing period, if billed
    pub current_period_end: Option<DateTime<Utc>>,
    /// Whether the plan lapses at the end of the period
    pub cancel_at_period_end: bool,
    /// Founder program member
    pub is_founder: bool,
    /// When the subscription started, if ever
    pub created_at: Option<DateTime<Utc>>,
}
