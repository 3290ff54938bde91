//! Wallet types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate stats shown in wallet listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    /// Swaps made by the wallet
    pub total_swaps: u64,
    /// Positions currently open
    pub open_positions: u64,
}

/// A wallet as returned by `GET /wallets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletListItem {
    /// Numeric identifier
    pub id: i64,
    /// Share of profitable closed positions, 0.0 to 1.0
    pub win_rate: Option<f64>,
    /// Realized profit and loss, in USD
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: Option<f64>,
    /// When the wallet started being tracked
    pub created_at: DateTime<Utc>,
    /// Aggregate stats
    pub stats: WalletStats,
    /// Labels
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub tags: Vec<String>,
}

/// Detail stats, adding the follower count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetailStats {
    /// Swaps made by the wallet
    pub total_swaps: u64,
    /// Positions currently open
    pub open_positions: u64,
    /// Users following this wallet
    pub followers: u64,
}

/// A top-performing token held or traded by a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopToken {
    /// Token ticker
    pub symbol: String,
    /// Realized profit on this token, in USD
    pub realized_profit_usd: f64,
    /// Trades made with this token
    pub trade_count: u64,
}

/// Full detail of a single wallet, from `GET /wallets/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Numeric identifier
    pub id: i64,
    /// Share of profitable closed positions, 0.0 to 1.0
    pub win_rate: Option<f64>,
    /// Realized profit and loss, in USD
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: Option<f64>,
    /// When the wallet started being tracked
    pub created_at: DateTime<Utc>,
    /// Aggregate stats
    pub stats: WalletDetailStats,
    /// Labels
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub tags: Vec<String>,
    /// Tracking status (e.g. `ACTIVE`)
    pub status: String,
    /// Best tokens by realized profit
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub top_tokens: Vec<TopToken>,
}
