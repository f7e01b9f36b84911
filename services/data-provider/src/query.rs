//! Client-side entity filters

use serde::{Deserialize, Serialize};
use services_common::{NewsArticle, NewsCategory, Sentiment, Trade, TradeAction, TradeStatus};

/// Filter over the trade blotter
///
/// Absent fields match everything; the search term matches symbol, channel
/// or trader case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeQuery {
    /// Free-text search over symbol / channel / trader
    pub search: Option<String>,
    /// Restrict to one lifecycle status
    pub status: Option<TradeStatus>,
    /// Restrict to one direction
    pub action: Option<TradeAction>,
}

impl TradeQuery {
    /// Whether a trade satisfies every populated criterion
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(status) = self.status {
            if trade.status != status {
                return false;
            }
        }
        if let Some(action) = self.action {
            if trade.action != action {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = trade.symbol.to_lowercase().contains(&term)
                || trade.channel.to_lowercase().contains(&term)
                || trade.trader_label().to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Filter over the news feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsFilter {
    /// Restrict to one category (the page's tab)
    pub category: Option<NewsCategory>,
    /// Restrict to one sentiment grading
    pub sentiment: Option<Sentiment>,
    /// Free-text search over title / summary
    pub search: Option<String>,
}

impl NewsFilter {
    /// Whether an article satisfies every populated criterion
    #[must_use]
    pub fn matches(&self, article: &NewsArticle) -> bool {
        if let Some(category) = self.category {
            if article.category != category {
                return false;
            }
        }
        if let Some(sentiment) = self.sentiment {
            if article.sentiment != sentiment {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = article.title.to_lowercase().contains(&term)
                || article.summary.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}
