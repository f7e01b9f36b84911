//! Dashboard session service
//!
//! Wires the data provider to the aggregation engine:
//! - Assembles the full render snapshot (summary, overview, trader and
//!   channel tables, chart feeds) in one pass
//! - Applies channel configuration updates and surfaces auto-disable
//!   decisions as events
//! - Runs the timer-driven simulated system metrics
//!
//! Rendering itself happens elsewhere; this layer only produces the data.

pub mod metrics;

use analytics::{
    ChannelPerformance, DailyCount, DailyPnl, DashboardSummary, OverviewStats, TimeWindow,
    TraderPerformance, TraderSort,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use data_provider::DataProvider;
use serde::{Deserialize, Serialize};
use services_common::{
    AssetType, Channel, ChannelUpdate, ProviderError, RECENT_TRADES_LIMIT, Signal, Trade,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

pub use metrics::{MetricsSimulator, SystemMetrics};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Dashboard service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Trades fetched per snapshot
    pub trade_fetch_limit: usize,
    /// Recent trades included in the snapshot
    pub recent_trades: usize,
    /// Signals included in the snapshot
    pub signal_fetch_limit: usize,
    /// Simulated metrics tick interval
    pub metrics_interval_ms: u64,
    /// Seed for the metrics simulator
    pub metrics_seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trade_fetch_limit: 500,
            recent_trades: RECENT_TRADES_LIMIT,
            signal_fetch_limit: 20,
            metrics_interval_ms: 2000,
            metrics_seed: 0,
        }
    }
}

/// Events broadcast to dashboard subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DashboardEvent {
    /// Simulated system metrics advanced
    MetricsUpdated {
        /// Tick time
        timestamp: DateTime<Utc>,
        /// Updated counters
        metrics: SystemMetrics,
    },
    /// A fresh snapshot was assembled
    SnapshotReady {
        /// Assembly time
        timestamp: DateTime<Utc>,
        /// Analysis window the snapshot covers
        window: TimeWindow,
    },
    /// A channel was disabled by its win-rate evaluation
    ChannelDisabled {
        /// Channel name
        channel: String,
        /// Recorded reason
        reason: String,
    },
}

/// Everything the dashboard renders, assembled in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Assembly time
    pub generated_at: DateTime<Utc>,
    /// Analysis window for the overview section
    pub window: TimeWindow,
    /// Headline stat cards
    pub summary: DashboardSummary,
    /// Windowed overview statistics
    pub overview: OverviewStats,
    /// Trader table, sorted by total pnl
    pub traders: Vec<TraderPerformance>,
    /// Channel performance table
    pub channel_performance: Vec<ChannelPerformance>,
    /// Channel status cards
    pub channels: Vec<Channel>,
    /// Recent trades blotter
    pub recent_trades: Vec<Trade>,
    /// Pending/recent signals
    pub signals: Vec<Signal>,
    /// Daily pnl chart feed
    pub pnl_over_time: Vec<DailyPnl>,
    /// Daily trade-count chart feed
    pub volume_by_day: Vec<DailyCount>,
    /// Asset class distribution
    pub asset_distribution: Vec<(AssetType, usize)>,
}

/// Main dashboard service
pub struct DashboardService {
    provider: Arc<dyn DataProvider>,
    event_broadcaster: broadcast::Sender<DashboardEvent>,
    config: DashboardConfig,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a service over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn DataProvider>, config: DashboardConfig) -> Self {
        let (event_broadcaster, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            provider,
            event_broadcaster,
            config,
        }
    }

    /// Subscribe to dashboard events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.event_broadcaster.subscribe()
    }

    /// Assemble a full render snapshot for the given window
    pub async fn snapshot(&self, window: TimeWindow) -> Result<DashboardSnapshot> {
        let now = Utc::now();
        let trades = self.provider.list_trades(self.config.trade_fetch_limit).await?;
        let positions = self.provider.list_positions().await?;
        let channels = self.provider.list_channels().await?;
        let signals = self.provider.list_signals(self.config.signal_fetch_limit).await?;

        let mut traders = analytics::trader_performance(&trades);
        analytics::sort_traders(&mut traders, TraderSort::TotalPnl);

        let snapshot = DashboardSnapshot {
            generated_at: now,
            window,
            summary: analytics::dashboard_summary(&trades, &positions, now),
            overview: analytics::overview_stats(&trades, window, now),
            traders,
            channel_performance: analytics::channel_performance(&trades),
            channels,
            recent_trades: trades.iter().take(self.config.recent_trades).cloned().collect(),
            signals,
            pnl_over_time: analytics::pnl_by_day(&trades, window, now),
            volume_by_day: analytics::trade_volume_by_day(&trades, window, now),
            asset_distribution: analytics::asset_distribution(&trades),
        };

        debug!(
            trades = snapshot.summary.total_trades,
            traders = snapshot.traders.len(),
            channels = snapshot.channels.len(),
            "Assembled dashboard snapshot"
        );

        // Ignore send errors as receivers may have disconnected
        drop(self.event_broadcaster.send(DashboardEvent::SnapshotReady {
            timestamp: now,
            window,
        }));

        Ok(snapshot)
    }

    /// Flip a channel's active flag
    pub async fn toggle_channel(&self, id: u64) -> Result<Channel> {
        let channels = self.provider.list_channels().await?;
        let current = channels
            .iter()
            .find(|channel| channel.id == id)
            .ok_or(ProviderError::UnknownChannel(id))?;

        let update = ChannelUpdate {
            is_active: Some(!current.is_active),
            ..ChannelUpdate::default()
        };
        self.apply_channel_update(id, update).await
    }

    /// Apply a configuration update to a channel
    ///
    /// Broadcasts [`DashboardEvent::ChannelDisabled`] when the update trips
    /// the win-rate auto-disable.
    pub async fn configure_channel(&self, id: u64, update: ChannelUpdate) -> Result<Channel> {
        self.apply_channel_update(id, update).await
    }

    async fn apply_channel_update(&self, id: u64, update: ChannelUpdate) -> Result<Channel> {
        let requested_active = update.is_active;
        let channel = self.provider.update_channel(id, update).await?;

        let auto_disabled = !channel.is_active
            && requested_active != Some(false)
            && channel.disabled_reason.is_some();
        if auto_disabled {
            if let Some(reason) = &channel.disabled_reason {
                drop(self.event_broadcaster.send(DashboardEvent::ChannelDisabled {
                    channel: channel.name.clone(),
                    reason: reason.clone(),
                }));
            }
        }

        Ok(channel)
    }

    /// Start the timer-driven simulated metrics task
    pub fn start_metrics_simulation(&self) {
        let broadcaster = self.event_broadcaster.clone();
        let interval_ms = self.config.metrics_interval_ms;
        let mut simulator = MetricsSimulator::new(self.config.metrics_seed);

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_millis(interval_ms));
            loop {
                interval.tick().await;
                let metrics = simulator.tick();
                // Ignore send errors as receivers may have disconnected
                drop(broadcaster.send(DashboardEvent::MetricsUpdated {
                    timestamp: Utc::now(),
                    metrics,
                }));
            }
        });

        info!(interval_ms, "Metrics simulation started");
    }
}
