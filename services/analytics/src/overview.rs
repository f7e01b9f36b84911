//! Time-windowed overview statistics and chart feeds

use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use services_common::{AssetType, SYMBOL_TABLE_LIMIT, Trade};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Trailing analysis window, anchored to the start of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Trailing 7 days
    Days7,
    /// Trailing 30 days
    Days30,
    /// Trailing 90 days
    Days90,
}

impl TimeWindow {
    /// Window length in days
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Days7 => 7,
            Self::Days30 => 30,
            Self::Days90 => 90,
        }
    }

    /// Inclusive window boundary: start of day N days before `now`
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        (now - chrono::Duration::days(self.days()))
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc()
    }
}

/// Per-symbol realized pnl total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPnl {
    /// Ticker symbol
    pub symbol: String,
    /// Summed pnl over the window
    pub pnl: f64,
}

/// Windowed overview statistics for the analytics page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Number of winning trades in the window
    pub total_wins: u32,
    /// Number of losing trades in the window
    pub total_losses: u32,
    /// Sum of positive pnl
    pub gross_profit: f64,
    /// Absolute sum of negative pnl
    pub gross_loss: f64,
    /// `gross_profit` / `gross_loss`; infinite when there are no losses
    pub profit_factor: f64,
    /// `gross_profit` / winning-trade count (0 when none)
    pub avg_win: f64,
    /// `gross_loss` / losing-trade count (0 when none)
    pub avg_loss: f64,
    /// Best symbols by pnl, descending
    pub top_symbols: Vec<SymbolPnl>,
    /// Worst symbols by pnl, ascending from the worst
    pub worst_symbols: Vec<SymbolPnl>,
}

/// Per-day realized pnl sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnl {
    /// Day label, e.g. "Mar 04"
    pub date: String,
    /// Summed pnl for the day
    pub pnl: f64,
}

/// Per-day trade count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Day label, e.g. "Mar 04"
    pub date: String,
    /// Number of trades created that day
    pub count: usize,
}

/// Windowed overview statistics over executed trades with reported pnl
///
/// Total over any input: an empty window produces zeroed counts and the
/// zero-loss case produces the infinity sentinel for the profit factor
/// rather than an error.
#[must_use]
pub fn overview_stats(trades: &[Trade], window: TimeWindow, now: DateTime<Utc>) -> OverviewStats {
    let cutoff = window.cutoff(now);
    let eligible: Vec<&Trade> = trades
        .iter()
        .filter(|trade| trade.created_date >= cutoff && trade.is_executed() && trade.pnl.is_some())
        .collect();

    let mut total_wins = 0u32;
    let mut total_losses = 0u32;
    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut symbol_pnl: FxHashMap<&str, f64> = FxHashMap::default();

    for trade in &eligible {
        let pnl = trade.pnl_or_zero();
        if pnl > 0.0 {
            total_wins += 1;
            gross_profit += pnl;
        } else if pnl < 0.0 {
            total_losses += 1;
            gross_loss += pnl.abs();
        }
        *symbol_pnl.entry(trade.symbol.as_str()).or_insert(0.0) += pnl;
    }

    let profit_factor = if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else {
        f64::INFINITY
    };
    let avg_win = if total_wins > 0 {
        gross_profit / f64::from(total_wins)
    } else {
        0.0
    };
    let avg_loss = if total_losses > 0 {
        gross_loss / f64::from(total_losses)
    } else {
        0.0
    };

    let mut ranked: Vec<SymbolPnl> = symbol_pnl
        .into_iter()
        .map(|(symbol, pnl)| SymbolPnl {
            symbol: symbol.to_string(),
            pnl,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.pnl
            .partial_cmp(&a.pnl)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    let top_symbols = ranked.iter().take(SYMBOL_TABLE_LIMIT).cloned().collect();
    let worst_symbols = ranked
        .iter()
        .rev()
        .take(SYMBOL_TABLE_LIMIT)
        .cloned()
        .collect();

    OverviewStats {
        total_wins,
        total_losses,
        gross_profit,
        gross_loss,
        profit_factor,
        avg_win,
        avg_loss,
        top_symbols,
        worst_symbols,
    }
}

/// Per-day pnl sums over executed trades in the window
#[must_use]
pub fn pnl_by_day(trades: &[Trade], window: TimeWindow, now: DateTime<Utc>) -> Vec<DailyPnl> {
    let cutoff = window.cutoff(now);
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for trade in trades {
        if trade.created_date >= cutoff && trade.is_executed() {
            if let Some(pnl) = trade.pnl {
                *by_day.entry(trade.created_date.date_naive()).or_insert(0.0) += pnl;
            }
        }
    }
    by_day
        .into_iter()
        .map(|(day, pnl)| DailyPnl {
            date: day.format("%b %d").to_string(),
            pnl,
        })
        .collect()
}

/// Per-day trade counts (all statuses) in the window
#[must_use]
pub fn trade_volume_by_day(
    trades: &[Trade],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<DailyCount> {
    let cutoff = window.cutoff(now);
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for trade in trades {
        if trade.created_date >= cutoff {
            *by_day.entry(trade.created_date.date_naive()).or_insert(0) += 1;
        }
    }
    by_day
        .into_iter()
        .map(|(day, count)| DailyCount {
            date: day.format("%b %d").to_string(),
            count,
        })
        .collect()
}

/// Trade counts per asset class over the full collection, first-traded order
#[must_use]
pub fn asset_distribution(trades: &[Trade]) -> Vec<(AssetType, usize)> {
    let mut counts: Vec<(AssetType, usize)> = Vec::new();
    for trade in trades {
        match counts
            .iter_mut()
            .find(|(asset, _)| *asset == trade.asset_type)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((trade.asset_type, 1)),
        }
    }
    counts
}
