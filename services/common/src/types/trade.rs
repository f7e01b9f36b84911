//! Trade records produced by signal execution

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback bucket label for trades without an attributed trader
pub const UNKNOWN_TRADER: &str = "Unknown";

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    /// Buy (open or add to a long)
    Buy,
    /// Sell (close or short)
    Sell,
}

/// Asset class of the traded instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// Equity
    Stock,
    /// Equity option contract
    Option,
    /// Cryptocurrency
    Crypto,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => write!(f, "STOCK"),
            Self::Option => write!(f, "OPTION"),
            Self::Crypto => write!(f, "CRYPTO"),
        }
    }
}

/// Lifecycle status of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Filled; pnl is populated
    Executed,
    /// Submitted but not yet filled
    Pending,
    /// Cancelled before execution
    Cancelled,
    /// Rejected or failed at the broker
    Failed,
}

/// A single trade record
///
/// Immutable once generated; the aggregation layer treats the collection as
/// read-only input. Optional fields model the source feed, which omits pnl
/// for unexecuted trades and trader attribution for some channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade identifier
    pub id: u64,
    /// Ticker symbol
    pub symbol: String,
    /// Buy or sell
    pub action: TradeAction,
    /// Number of units traded
    pub quantity: u32,
    /// Execution price per unit
    pub price: f64,
    /// Asset class
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Lifecycle status
    pub status: TradeStatus,
    /// Signal channel the trade originated from
    pub channel: String,
    /// Trader attribution, when the channel reports one
    pub trader: Option<String>,
    /// Signal confidence (0-1), when reported
    pub confidence: Option<f64>,
    /// Realized profit and loss, absent until executed
    pub pnl: Option<f64>,
    /// Signal creation time
    pub created_date: DateTime<Utc>,
    /// Fill time, absent until executed
    pub execution_time: Option<DateTime<Utc>>,
}

impl Trade {
    /// Realized pnl, treating absent as zero
    #[must_use]
    pub fn pnl_or_zero(&self) -> f64 {
        self.pnl.unwrap_or(0.0)
    }

    /// Trader attribution, falling back to the shared "Unknown" bucket
    #[must_use]
    pub fn trader_label(&self) -> &str {
        self.trader.as_deref().unwrap_or(UNKNOWN_TRADER)
    }

    /// Whether the trade has been filled
    #[must_use]
    pub fn is_executed(&self) -> bool {
        self.status == TradeStatus::Executed
    }
}
