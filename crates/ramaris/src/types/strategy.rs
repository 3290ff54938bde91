//! Strategy types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user who created a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCreator {
    /// Public nickname
    pub nickname: String,
}

/// Aggregate stats shown in strategy listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStats {
    /// Wallets the strategy follows
    pub wallets_tracked: u64,
    /// Swaps observed across those wallets
    pub total_swaps: u64,
}

/// A strategy as returned by `GET /strategies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyListItem {
    /// Numeric identifier
    pub id: i64,
    /// Public share identifier, used to fetch the detail view
    pub share_id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Return on investment, in percent
    pub roi_percent: Option<f64>,
    /// Most recent swap seen for this strategy
    pub last_activity_at: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Creator
    pub creator: StrategyCreator,
    /// Aggregate stats
    pub stats: StrategyStats,
}

/// Detail stats, adding the notification count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDetailStats {
    /// Wallets the strategy follows
    pub wallets_tracked: u64,
    /// Swaps observed across those wallets
    pub total_swaps: u64,
    /// Notifications sent to followers
    pub total_notifications: u64,
}

/// Full detail of a single strategy, from `GET /strategies/{shareId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Numeric identifier
    pub id: i64,
    /// Public share identifier
    pub share_id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Return on investment, in percent
    pub roi_percent: Option<f64>,
    /// Most recent swap seen for this strategy
    pub last_activity_at: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Creator
    pub creator: StrategyCreator,
    /// Aggregate stats
    pub stats: StrategyDetailStats,
    /// Lifecycle status (e.g. `ACTIVE`)
    pub status: String,
    /// Labels
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub tags: Vec<String>,
}

/// A strategy in the authenticated user's watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStrategy {
    /// Numeric identifier
    pub id: i64,
    /// Public share identifier
    pub share_id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Return on investment, in percent
    pub roi_percent: Option<f64>,
    /// Most recent swap seen for this strategy
    pub last_activity_at: Option<DateTime<Utc>>,
    /// Creator
    pub creator: StrategyCreator,
    /// When the user added it to the watchlist
    pub copied_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_item_deserialization() {
        let json = r#"{
            "id": 1,
            "shareId": "abc123",
            "name": "Top Wallets",
            "description": "Tracks best performers",
            "roiPercent": 42.5,
            "lastActivityAt": "2025-01-15T10:30:00Z",
            "createdAt": "2024-12-01T00:00:00Z",
            "creator": {"nickname": "alice"},
            "stats": {"walletsTracked": 10, "totalSwaps": 250}
        }"#;

        let item: StrategyListItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.share_id, "abc123");
        assert_eq!(item.description.as_deref(), Some("Tracks best performers"));
        assert_eq!(item.roi_percent, Some(42.5));
        assert_eq!(
            item.last_activity_at,
            Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(item.creator.nickname, "alice");
        assert_eq!(item.stats.wallets_tracked, 10);
    }

    #[test]
    fn test_list_item_null_fields() {
        let json = r#"{
            "id": 2,
            "shareId": "def456",
            "name": "New Strategy",
            "description": null,
            "roiPercent": null,
            "lastActivityAt": null,
            "createdAt": "2025-01-01T00:00:00Z",
            "creator": {"nickname": "bob"},
            "stats": {"walletsTracked": 0, "totalSwaps": 0}
        }"#;

        let item: StrategyListItem = serde_json::from_str(json).unwrap();
        assert!(item.description.is_none());
        assert!(item.roi_percent.is_none());
        assert!(item.last_activity_at.is_none());
    }

    #[test]
    fn test_strategy_detail_deserialization() {
        let json = r#"{
            "id": 1,
            "shareId": "abc123",
            "name": "Top Wallets",
            "description": null,
            "roiPercent": 42.5,
            "lastActivityAt": null,
            "createdAt": "2024-12-01T00:00:00Z",
            "creator": {"nickname": "alice"},
            "stats": {"walletsTracked": 10, "totalSwaps": 250, "totalNotifications": 5},
            "status": "ACTIVE",
            "tags": ["base", "defi"]
        }"#;

        let strategy: Strategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.status, "ACTIVE");
        assert_eq!(strategy.stats.total_notifications, 5);
        assert_eq!(strategy.tags, vec!["base", "defi"]);
    }

    #[test]
    fn test_strategy_null_or_missing_tags() {
        let base = r#""id": 1, "shareId": "abc123", "name": "Top Wallets",
            "createdAt": "2024-12-01T00:00:00Z", "creator": {"nickname": "alice"},
            "stats": {"walletsTracked": 0, "totalSwaps": 0, "totalNotifications": 0},
            "status": "ACTIVE""#;

        let with_null: Strategy = serde_json::from_str(&format!("{{{base}, \"tags\": null}}")).unwrap();
        assert!(with_null.tags.is_empty());

        let missing: Strategy = serde_json::from_str(&format!("{{{base}}}")).unwrap();
        assert!(missing.tags.is_empty());
    }

    #[test]
    fn test_watchlist_serialization_uses_camel_case() {
        let entry = WatchlistStrategy {
            id: 9,
            share_id: "w9".to_string(),
            name: "Copied".to_string(),
            description: None,
            roi_percent: None,
            last_activity_at: None,
            creator: StrategyCreator {
                nickname: "carol".to_string(),
            },
            copied_at: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["shareId"], "w9");
        assert!(json.get("copiedAt").is_some());
        assert!(json["roiPercent"].is_null());
    }
}
