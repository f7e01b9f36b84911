//! Mock data provider configuration

use serde::{Deserialize, Serialize};

/// Mock data provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// RNG seed; equal seeds reproduce the same entity store
    pub seed: u64,

    /// Number of trades to generate
    pub trades: usize,

    /// Number of positions to generate
    pub positions: usize,

    /// Number of signals to generate
    pub signals: usize,

    /// Number of news articles to generate
    pub news_articles: usize,

    /// Days of trade history to spread `created_date` over
    pub history_days: i64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trades: 50,
            positions: 10,
            signals: 20,
            news_articles: 30,
            history_days: 30,
        }
    }
}
