//! Per-trader performance statistics

use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use services_common::{
    AssetType, CONSISTENCY_PENALTY_FACTOR, HIGH_RISK_SPREAD, MEDIUM_RISK_SPREAD,
    NEUTRAL_CONSISTENCY_SCORE, PERCENT_SCALE, Trade,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Aggregated performance statistics for a single trader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderPerformance {
    /// Trader name ("Unknown" for unattributed trades)
    pub name: String,
    /// Number of trades attributed to the trader
    pub total_trades: u32,
    /// Trades with positive pnl
    pub wins: u32,
    /// Trades with negative pnl
    pub losses: u32,
    /// Sum of pnl, absent values counting as zero
    pub total_pnl: f64,
    /// wins / `total_trades` as a percentage (0 when no trades)
    pub win_rate: f64,
    /// `total_pnl` / `total_trades` (0 when no trades)
    pub avg_pnl: f64,
    /// Mean of reported confidence values (0 when none reported)
    pub avg_confidence: f64,
    /// Largest winning pnl (0 when no winners)
    pub best_trade: f64,
    /// Most negative losing pnl (0 when no losers)
    pub worst_trade: f64,
    /// Sample standard deviation of pnl (0 with fewer than 2 trades)
    pub std_dev: f64,
    /// `avg_pnl` / `std_dev` (0 when volatility is zero)
    pub sharpe_ratio: f64,
    /// Volatility-penalized 0-100 score; 50 when volatility is zero
    pub consistency_score: f64,
    /// Most frequently traded asset class
    pub primary_asset: AssetType,
    /// Per-asset-class trade counts, in first-traded order
    pub asset_counts: Vec<(AssetType, u32)>,
    /// Number of distinct channels the trader appears on
    pub channel_count: usize,
    /// Most recent trade time
    pub last_active: Option<DateTime<Utc>>,
}

/// Sort key for ranking traders (all descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraderSort {
    /// Total realized pnl
    TotalPnl,
    /// Win rate
    WinRate,
    /// Average pnl per trade
    AvgPnl,
    /// Trade count
    TotalTrades,
    /// Sharpe-like ratio
    SharpeRatio,
    /// Consistency score
    Consistency,
}

/// Volatility classification from the best-to-worst trade spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Spread above 500
    High,
    /// Spread above 200
    Medium,
    /// Everything else
    Low,
}

/// One point of a trader's cumulative pnl curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Day label, e.g. "Mar 04"
    pub date: String,
    /// Cumulative pnl at the end of that day
    pub pnl: f64,
}

/// Scatter-plot input pairing downside risk with average return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReturnPoint {
    /// Trader name
    pub name: String,
    /// Absolute worst trade (max single-trade loss)
    pub risk: f64,
    /// Average pnl per trade
    #[serde(rename = "return")]
    pub avg_return: f64,
    /// Total realized pnl
    pub total_pnl: f64,
    /// Trade count
    pub trades: u32,
}

/// Per-trader accumulator filled in the grouping pass
#[derive(Debug, Default)]
struct TraderBucket {
    pnls: Vec<f64>,
    confidences: Vec<f64>,
    channels: FxHashSet<String>,
    asset_counts: Vec<(AssetType, u32)>,
    wins: u32,
    losses: u32,
    total_pnl: f64,
    last_active: Option<DateTime<Utc>>,
}

impl TraderBucket {
    fn record(&mut self, trade: &Trade) {
        // pnl enters the volatility series for every trade, absent as zero
        self.pnls.push(trade.pnl_or_zero());
        if let Some(confidence) = trade.confidence {
            self.confidences.push(confidence);
        }
        self.channels.insert(trade.channel.clone());

        match self
            .asset_counts
            .iter_mut()
            .find(|(asset, _)| *asset == trade.asset_type)
        {
            Some((_, count)) => *count += 1,
            None => self.asset_counts.push((trade.asset_type, 1)),
        }

        if self
            .last_active
            .is_none_or(|seen| trade.created_date > seen)
        {
            self.last_active = Some(trade.created_date);
        }

        if let Some(pnl) = trade.pnl {
            self.total_pnl += pnl;
            if pnl > 0.0 {
                self.wins += 1;
            } else if pnl < 0.0 {
                self.losses += 1;
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self, name: String) -> TraderPerformance {
        let total_trades = u32::try_from(self.pnls.len()).unwrap_or(u32::MAX);
        let count = self.pnls.len() as f64;

        let (win_rate, avg_pnl) = if self.pnls.is_empty() {
            (0.0, 0.0)
        } else {
            (
                f64::from(self.wins) / count * PERCENT_SCALE,
                self.total_pnl / count,
            )
        };

        let avg_confidence = if self.confidences.is_empty() {
            0.0
        } else {
            self.confidences.iter().sum::<f64>() / self.confidences.len() as f64
        };

        let best_trade = self
            .pnls
            .iter()
            .copied()
            .filter(|pnl| *pnl > 0.0)
            .fold(0.0, f64::max);
        let worst_trade = self
            .pnls
            .iter()
            .copied()
            .filter(|pnl| *pnl < 0.0)
            .fold(0.0, f64::min);

        let std_dev = sample_std_dev(&self.pnls, avg_pnl);
        let sharpe_ratio = if std_dev > 0.0 { avg_pnl / std_dev } else { 0.0 };
        let consistency_score = consistency_score(avg_pnl, std_dev);
        let primary_asset = primary_asset(&self.asset_counts);

        TraderPerformance {
            name,
            total_trades,
            wins: self.wins,
            losses: self.losses,
            total_pnl: self.total_pnl,
            win_rate,
            avg_pnl,
            avg_confidence,
            best_trade,
            worst_trade,
            std_dev,
            sharpe_ratio,
            consistency_score,
            primary_asset,
            asset_counts: self.asset_counts,
            channel_count: self.channels.len(),
            last_active: self.last_active,
        }
    }
}

/// Group trades by trader and compute performance statistics
///
/// Trades without attribution land in the shared "Unknown" bucket. Output
/// order follows first appearance in the input.
#[must_use]
pub fn trader_performance(trades: &[Trade]) -> Vec<TraderPerformance> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: FxHashMap<String, TraderBucket> = FxHashMap::default();

    for trade in trades {
        let name = trade.trader_label();
        let bucket = buckets.entry(name.to_string()).or_insert_with(|| {
            order.push(name.to_string());
            TraderBucket::default()
        });
        bucket.record(trade);
    }

    order
        .into_iter()
        .map(|name| {
            let bucket = buckets.remove(&name).unwrap_or_default();
            bucket.finish(name)
        })
        .collect()
}

/// Sort trader statistics in place, descending by the given key
pub fn sort_traders(stats: &mut [TraderPerformance], sort: TraderSort) {
    stats.sort_by(|a, b| {
        let ordering = match sort {
            TraderSort::TotalPnl => b.total_pnl.partial_cmp(&a.total_pnl),
            TraderSort::WinRate => b.win_rate.partial_cmp(&a.win_rate),
            TraderSort::AvgPnl => b.avg_pnl.partial_cmp(&a.avg_pnl),
            TraderSort::TotalTrades => Some(b.total_trades.cmp(&a.total_trades)),
            TraderSort::SharpeRatio => b.sharpe_ratio.partial_cmp(&a.sharpe_ratio),
            TraderSort::Consistency => b.consistency_score.partial_cmp(&a.consistency_score),
        };
        ordering.unwrap_or(Ordering::Equal)
    });
}

/// Cumulative pnl curve for one trader, one point per calendar day
///
/// Trades are replayed in `created_date` order; several trades on the same
/// day collapse into a single point carrying the latest cumulative value,
/// so intra-day granularity is deliberately lost.
#[must_use]
pub fn equity_curve(trades: &[Trade], trader: &str) -> Vec<EquityPoint> {
    let mut own: Vec<&Trade> = trades
        .iter()
        .filter(|trade| trade.trader_label() == trader)
        .collect();
    own.sort_by_key(|trade| trade.created_date);

    let mut cumulative = 0.0;
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for trade in own {
        cumulative += trade.pnl_or_zero();
        by_day.insert(trade.created_date.date_naive(), cumulative);
    }

    by_day
        .into_iter()
        .map(|(day, pnl)| EquityPoint {
            date: day.format("%b %d").to_string(),
            pnl,
        })
        .collect()
}

/// Classify a trader's volatility from the best-to-worst trade spread
#[must_use]
pub fn risk_level(stats: &TraderPerformance) -> RiskLevel {
    let spread = (stats.worst_trade - stats.best_trade).abs();
    if spread > HIGH_RISK_SPREAD {
        RiskLevel::High
    } else if spread > MEDIUM_RISK_SPREAD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Risk-vs-return scatter input, one point per trader
#[must_use]
pub fn risk_vs_return(stats: &[TraderPerformance]) -> Vec<RiskReturnPoint> {
    stats
        .iter()
        .map(|trader| RiskReturnPoint {
            name: trader.name.clone(),
            risk: trader.worst_trade.abs(),
            avg_return: trader.avg_pnl,
            total_pnl: trader.total_pnl,
            trades: trader.total_trades,
        })
        .collect()
}

/// Sample standard deviation (n-1 divisor); zero with fewer than 2 values
#[allow(clippy::cast_precision_loss)]
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Volatility-penalized consistency score, clamped to [0, 100]
///
/// Zero volatility scores the neutral 50. A zero mean with nonzero
/// volatility makes the penalty ratio diverge; the clamp pins that case to
/// the floor rather than producing a non-finite score.
fn consistency_score(avg_pnl: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return NEUTRAL_CONSISTENCY_SCORE;
    }
    if avg_pnl == 0.0 {
        return 0.0;
    }
    (PERCENT_SCALE - (std_dev / avg_pnl.abs()) * CONSISTENCY_PENALTY_FACTOR).clamp(0.0, PERCENT_SCALE)
}

/// Most frequent asset class; ties break toward the earliest-traded one
fn primary_asset(counts: &[(AssetType, u32)]) -> AssetType {
    counts
        .iter()
        .copied()
        .fold(None, |best: Option<(AssetType, u32)>, candidate| match best {
            Some((_, best_count)) if candidate.1 <= best_count => best,
            _ => Some(candidate),
        })
        .map_or(AssetType::Stock, |(asset, _)| asset)
}
