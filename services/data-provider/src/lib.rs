//! Data provider layer for the `SignalDeck` dashboard
//!
//! Supplies the entity collections the presentation layer renders: trades,
//! positions, channels, signals, news and market events. The mock
//! implementation generates a deterministic in-memory store from a seed,
//! constructed once per session and handed to consumers explicitly (no
//! module-level cache, no lazy globals).

pub mod config;
pub mod mock;
pub mod query;

use anyhow::Result;
use async_trait::async_trait;
use services_common::{
    Channel, ChannelUpdate, MarketEvent, NewsArticle, Position, Signal, Trade,
};

pub use config::ProviderConfig;
pub use mock::MockDataProvider;
pub use query::{NewsFilter, TradeQuery};

/// Read/update access to the dashboard's entity collections
///
/// Entities are generated once and held for the session; the only mutation
/// is the in-place channel update. All list methods return clones, so
/// callers can aggregate without holding any lock.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Trades, newest first, at most `limit`
    async fn list_trades(&self, limit: usize) -> Result<Vec<Trade>>;

    /// Trades matching the given query, newest first
    async fn search_trades(&self, query: &TradeQuery) -> Result<Vec<Trade>>;

    /// All open positions
    async fn list_positions(&self) -> Result<Vec<Position>>;

    /// All registered channels
    async fn list_channels(&self) -> Result<Vec<Channel>>;

    /// Unprocessed and recent signals, newest first, at most `limit`
    async fn list_signals(&self, limit: usize) -> Result<Vec<Signal>>;

    /// News articles matching the filter, newest first, at most `limit`
    async fn list_news(&self, filter: &NewsFilter, limit: usize) -> Result<Vec<NewsArticle>>;

    /// Upcoming market calendar events
    async fn list_events(&self) -> Result<Vec<MarketEvent>>;

    /// Apply a partial update to a channel, returning the updated record
    ///
    /// When the update leaves auto-disable enabled and the channel fails
    /// its win-rate evaluation, the provider disables the channel and
    /// records the reason.
    async fn update_channel(&self, id: u64, update: ChannelUpdate) -> Result<Channel>;
}
