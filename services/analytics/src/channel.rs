//! Per-channel performance statistics

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use services_common::{PERCENT_SCALE, Trade};
use std::cmp::Ordering;

/// Aggregated performance for a single signal channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPerformance {
    /// Channel name
    pub channel: String,
    /// Number of trades attributed to the channel
    pub trades: u32,
    /// Trades with positive pnl
    pub wins: u32,
    /// Trades with negative pnl
    pub losses: u32,
    /// Sum of reported pnl
    pub total_pnl: f64,
    /// wins / trades as a percentage (0 when no trades)
    pub win_rate: f64,
    /// `total_pnl` / trades (0 when no trades)
    pub avg_pnl: f64,
}

#[derive(Debug, Default)]
struct ChannelBucket {
    trades: u32,
    wins: u32,
    losses: u32,
    total_pnl: f64,
}

/// Group trades by channel and compute win/loss statistics
///
/// Output is sorted descending by total pnl, the order the dashboard's
/// channel table uses.
#[must_use]
pub fn channel_performance(trades: &[Trade]) -> Vec<ChannelPerformance> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: FxHashMap<String, ChannelBucket> = FxHashMap::default();

    for trade in trades {
        let bucket = buckets.entry(trade.channel.clone()).or_insert_with(|| {
            order.push(trade.channel.clone());
            ChannelBucket::default()
        });
        bucket.trades += 1;
        if let Some(pnl) = trade.pnl {
            bucket.total_pnl += pnl;
            if pnl > 0.0 {
                bucket.wins += 1;
            } else if pnl < 0.0 {
                bucket.losses += 1;
            }
        }
    }

    let mut stats: Vec<ChannelPerformance> = order
        .into_iter()
        .map(|channel| {
            let bucket = buckets.remove(&channel).unwrap_or_default();
            let (win_rate, avg_pnl) = if bucket.trades == 0 {
                (0.0, 0.0)
            } else {
                (
                    f64::from(bucket.wins) / f64::from(bucket.trades) * PERCENT_SCALE,
                    bucket.total_pnl / f64::from(bucket.trades),
                )
            };
            ChannelPerformance {
                channel,
                trades: bucket.trades,
                wins: bucket.wins,
                losses: bucket.losses,
                total_pnl: bucket.total_pnl,
                win_rate,
                avg_pnl,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.total_pnl
            .partial_cmp(&a.total_pnl)
            .unwrap_or(Ordering::Equal)
    });
    stats
}
