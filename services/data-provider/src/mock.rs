//! Seeded in-memory mock data provider
//!
//! Generates the same entity shapes a live feed would supply, from a
//! deterministic RNG so fixed seeds reproduce fixtures exactly. The store
//! is built once in the constructor; the session then reads it in place.

use crate::config::ProviderConfig;
use crate::query::{NewsFilter, TradeQuery};
use crate::DataProvider;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services_common::{
    AssetType, Channel, ChannelUpdate, EventCategory, Importance, MarketEvent, NewsArticle,
    NewsCategory, Position, ProviderError, Sentiment, Signal, Trade, TradeAction, TradeStatus,
};
use tracing::{info, warn};

const SYMBOLS: [&str; 8] = [
    "AAPL", "TSLA", "NVDA", "MSFT", "GOOGL", "AMZN", "META", "NFLX",
];
const CHANNEL_SLUGS: [&str; 4] = ["alpha-signals", "pro-traders", "market-movers", "crypto-calls"];
const TRADERS: [&str; 5] = ["TradeMaster", "AlphaWolf", "MarketGuru", "CryptoKing", "StockSage"];
const NEWS_SOURCES: [&str; 4] = ["Reuters", "Bloomberg", "CNBC", "MarketWatch"];

/// The generated entity collections held for the session
#[derive(Debug)]
struct EntityStore {
    trades: Vec<Trade>,
    positions: Vec<Position>,
    channels: Vec<Channel>,
    signals: Vec<Signal>,
    news: Vec<NewsArticle>,
    events: Vec<MarketEvent>,
}

/// Mock [`DataProvider`] backed by a seeded in-memory store
#[derive(Debug)]
pub struct MockDataProvider {
    store: RwLock<EntityStore>,
}

impl MockDataProvider {
    /// Generate a store anchored to the current time
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_now(config, Utc::now())
    }

    /// Generate a store anchored to an explicit "now" (deterministic tests)
    #[must_use]
    pub fn with_now(config: &ProviderConfig, now: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let store = EntityStore {
            trades: generate_trades(&mut rng, config, now),
            positions: generate_positions(&mut rng, config, now),
            channels: generate_channels(&mut rng, now),
            signals: generate_signals(&mut rng, config, now),
            news: generate_news(&mut rng, config, now),
            events: generate_events(&mut rng, now),
        };
        info!(
            trades = store.trades.len(),
            positions = store.positions.len(),
            channels = store.channels.len(),
            signals = store.signals.len(),
            news = store.news.len(),
            events = store.events.len(),
            seed = config.seed,
            "Generated mock entity store"
        );
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn list_trades(&self, limit: usize) -> Result<Vec<Trade>> {
        let store = self.store.read();
        let mut trades = store.trades.clone();
        trades.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        trades.truncate(limit);
        Ok(trades)
    }

    async fn search_trades(&self, query: &TradeQuery) -> Result<Vec<Trade>> {
        let store = self.store.read();
        let mut trades: Vec<Trade> = store
            .trades
            .iter()
            .filter(|trade| query.matches(trade))
            .cloned()
            .collect();
        trades.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(trades)
    }

    async fn list_positions(&self) -> Result<Vec<Position>> {
        Ok(self.store.read().positions.clone())
    }

    async fn list_channels(&self) -> Result<Vec<Channel>> {
        Ok(self.store.read().channels.clone())
    }

    async fn list_signals(&self, limit: usize) -> Result<Vec<Signal>> {
        let store = self.store.read();
        let mut signals = store.signals.clone();
        signals.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        signals.truncate(limit);
        Ok(signals)
    }

    async fn list_news(&self, filter: &NewsFilter, limit: usize) -> Result<Vec<NewsArticle>> {
        let store = self.store.read();
        let mut articles: Vec<NewsArticle> = store
            .news
            .iter()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        articles.truncate(limit);
        Ok(articles)
    }

    async fn list_events(&self) -> Result<Vec<MarketEvent>> {
        Ok(self.store.read().events.clone())
    }

    async fn update_channel(&self, id: u64, update: ChannelUpdate) -> Result<Channel> {
        let mut store = self.store.write();
        let channel = store
            .channels
            .iter_mut()
            .find(|channel| channel.id == id)
            .ok_or(ProviderError::UnknownChannel(id))?;

        channel.apply_update(&update);

        if channel.is_active {
            if let Some(reason) = channel.auto_disable_reason() {
                warn!(channel = %channel.name, %reason, "Channel auto-disabled");
                channel.is_active = false;
                channel.disabled_reason = Some(reason);
            }
        }

        Ok(channel.clone())
    }
}

fn generate_trades(rng: &mut StdRng, config: &ProviderConfig, now: DateTime<Utc>) -> Vec<Trade> {
    (0..config.trades)
        .map(|i| {
            let status = [
                TradeStatus::Executed,
                TradeStatus::Pending,
                TradeStatus::Cancelled,
            ][rng.gen_range(0..3)];
            let created = now - Duration::seconds(rng.gen_range(0..config.history_days * 86_400));
            // pnl and fill time exist only once the trade has executed
            let (pnl, execution_time) = if status == TradeStatus::Executed {
                (
                    Some((rng.gen_range(0.0..1.0) - 0.5) * 200.0),
                    Some(created + Duration::minutes(rng.gen_range(1..30))),
                )
            } else {
                (None, None)
            };

            Trade {
                id: i as u64 + 1,
                symbol: SYMBOLS[rng.gen_range(0..SYMBOLS.len())].to_string(),
                action: if rng.gen_bool(0.5) {
                    TradeAction::Buy
                } else {
                    TradeAction::Sell
                },
                quantity: rng.gen_range(1..=100),
                price: rng.gen_range(50.0..250.0),
                asset_type: if rng.gen_bool(0.2) {
                    AssetType::Option
                } else {
                    AssetType::Stock
                },
                status,
                channel: CHANNEL_SLUGS[rng.gen_range(0..CHANNEL_SLUGS.len())].to_string(),
                trader: if rng.gen_bool(0.1) {
                    None
                } else {
                    Some(TRADERS[rng.gen_range(0..TRADERS.len())].to_string())
                },
                confidence: Some(rng.gen_range(0.6..1.0)),
                pnl,
                created_date: created,
                execution_time,
            }
        })
        .collect()
}

fn generate_positions(
    rng: &mut StdRng,
    config: &ProviderConfig,
    now: DateTime<Utc>,
) -> Vec<Position> {
    (0..config.positions)
        .map(|i| {
            Position::new(
                i as u64 + 1,
                SYMBOLS[i % 5].to_string(),
                rng.gen_range(10..60),
                rng.gen_range(100.0..300.0),
                rng.gen_range(100.0..300.0),
                CHANNEL_SLUGS[rng.gen_range(0..3)].to_string(),
                now - Duration::seconds(rng.gen_range(0..60 * 86_400)),
            )
        })
        .collect()
}

fn generate_channels(rng: &mut StdRng, now: DateTime<Utc>) -> Vec<Channel> {
    let descriptions: [(&str, &str); 4] = [
        ("Alpha Signals", "Premium trading signals"),
        ("Pro Traders", "Professional trader community"),
        ("Market Movers", "High-impact market moves"),
        ("Crypto Calls", "Cryptocurrency trading signals"),
    ];

    descriptions
        .iter()
        .enumerate()
        .map(|(i, (name, description))| Channel {
            id: i as u64 + 1,
            name: (*name).to_string(),
            description: (*description).to_string(),
            is_active: rng.gen_bool(0.8),
            total_trades: rng.gen_range(10..110),
            win_rate: rng.gen_range(50.0..90.0),
            total_pnl: (rng.gen_range(0.0..1.0) - 0.3) * 1000.0,
            auto_disable_enabled: rng.gen_bool(0.5),
            disabled_reason: None,
            last_message: now - Duration::seconds(rng.gen_range(0..7 * 86_400)),
            created_date: now - Duration::seconds(rng.gen_range(0..90 * 86_400)),
            ..Channel::default()
        })
        .collect()
}

fn generate_signals(rng: &mut StdRng, config: &ProviderConfig, now: DateTime<Utc>) -> Vec<Signal> {
    (0..config.signals)
        .map(|i| Signal {
            id: i as u64 + 1,
            symbol: SYMBOLS[rng.gen_range(0..4)].to_string(),
            action: if rng.gen_bool(0.5) {
                TradeAction::Buy
            } else {
                TradeAction::Sell
            },
            confidence: rng.gen_range(0.7..1.0),
            price_target: rng.gen_range(100.0..300.0),
            channel: CHANNEL_SLUGS[rng.gen_range(0..2)].to_string(),
            processed: rng.gen_bool(0.7),
            created_date: now - Duration::seconds(rng.gen_range(0..7 * 86_400)),
        })
        .collect()
}

fn generate_news(rng: &mut StdRng, config: &ProviderConfig, now: DateTime<Utc>) -> Vec<NewsArticle> {
    let categories = [
        NewsCategory::Market,
        NewsCategory::Earnings,
        NewsCategory::Economic,
        NewsCategory::Crypto,
    ];
    let sentiments = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
    let importance = [Importance::High, Importance::Medium, Importance::Low];

    (0..config.news_articles)
        .map(|i| NewsArticle {
            id: i as u64 + 1,
            title: format!("Market News Article {}", i + 1),
            summary: "This is a sample news article summary that provides key insights into \
                      market movements."
                .to_string(),
            source: NEWS_SOURCES[rng.gen_range(0..NEWS_SOURCES.len())].to_string(),
            category: categories[rng.gen_range(0..categories.len())],
            sentiment: sentiments[rng.gen_range(0..sentiments.len())],
            importance: importance[rng.gen_range(0..importance.len())],
            symbols_mentioned: SYMBOLS[..rng.gen_range(1..=2)]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            published_date: now - Duration::seconds(rng.gen_range(0..7 * 86_400)),
            url: "https://example.com/news".to_string(),
        })
        .collect()
}

fn generate_events(rng: &mut StdRng, now: DateTime<Utc>) -> Vec<MarketEvent> {
    let templates: [(&str, EventCategory, Importance); 4] = [
        ("Apple Earnings Report", EventCategory::Earnings, Importance::High),
        ("Federal Reserve Meeting", EventCategory::Fed, Importance::High),
        ("Tesla Delivery Numbers", EventCategory::Earnings, Importance::Medium),
        ("GDP Report Release", EventCategory::Economic, Importance::Medium),
    ];

    templates
        .iter()
        .enumerate()
        .map(|(i, (title, category, impact))| {
            let category_label = match category {
                EventCategory::Earnings => "earnings",
                EventCategory::Fed => "fed",
                EventCategory::Economic => "economic",
            };
            let symbols_affected = if *category == EventCategory::Earnings {
                title
                    .split_whitespace()
                    .next()
                    .map(str::to_uppercase)
                    .into_iter()
                    .collect()
            } else {
                Vec::new()
            };

            MarketEvent {
                id: i as u64 + 1,
                title: (*title).to_string(),
                category: *category,
                impact: *impact,
                date: (now + Duration::days(rng.gen_range(0..14))).date_naive(),
                time: "09:30 AM EST".to_string(),
                description: format!(
                    "Important {category_label} event that may impact market movements."
                ),
                symbols_affected,
            }
        })
        .collect()
}
