//! Signal, news and market-calendar feed entities

use crate::types::trade::TradeAction;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A raw trading signal awaiting processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Unique signal identifier
    pub id: u64,
    /// Ticker symbol
    pub symbol: String,
    /// Suggested direction
    pub action: TradeAction,
    /// Signal confidence (0-1)
    pub confidence: f64,
    /// Suggested price target
    pub price_target: f64,
    /// Channel the signal arrived on
    pub channel: String,
    /// Whether the signal has been turned into a trade
    pub processed: bool,
    /// Time the signal arrived
    pub created_date: DateTime<Utc>,
}

/// News article category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsCategory {
    /// General market coverage
    Market,
    /// Earnings coverage
    Earnings,
    /// Macro / economic data
    Economic,
    /// Cryptocurrency coverage
    Crypto,
}

/// Sentiment attached to an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    /// Bullish tone
    Positive,
    /// Bearish tone
    Negative,
    /// No clear direction
    Neutral,
}

/// Importance / impact grading shared by news and calendar events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    /// Market-moving
    High,
    /// Notable
    Medium,
    /// Background
    Low,
}

/// A news article surfaced on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Unique article identifier
    pub id: u64,
    /// Headline
    pub title: String,
    /// One-paragraph summary
    pub summary: String,
    /// Publishing outlet
    pub source: String,
    /// Coverage category
    pub category: NewsCategory,
    /// Sentiment grading
    pub sentiment: Sentiment,
    /// Importance grading
    pub importance: Importance,
    /// Symbols referenced in the article
    pub symbols_mentioned: Vec<String>,
    /// Publication time
    pub published_date: DateTime<Utc>,
    /// Link to the full article
    pub url: String,
}

/// Market calendar event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    /// Company earnings release
    Earnings,
    /// Federal Reserve announcement
    Fed,
    /// Macro data release
    Economic,
}

/// An upcoming market event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEvent {
    /// Unique event identifier
    pub id: u64,
    /// Event title
    pub title: String,
    /// Event category
    pub category: EventCategory,
    /// Expected market impact
    pub impact: Importance,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Scheduled time, as published
    pub time: String,
    /// Event description
    pub description: String,
    /// Symbols expected to move on the event
    pub symbols_affected: Vec<String>,
}
