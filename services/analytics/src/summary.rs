//! Dashboard headline summary statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use services_common::{PERCENT_SCALE, Position, Trade};

/// Headline figures for the dashboard's stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total number of trades, all statuses
    pub total_trades: usize,
    /// Realized pnl over executed trades
    pub total_pnl: f64,
    /// Realized pnl per executed trade (0 when none)
    pub avg_pnl: f64,
    /// Winning share of executed trades as a percentage (0 when none)
    pub win_rate: f64,
    /// Sum of open position market values
    pub total_position_value: f64,
    /// Realized pnl of trades filled on `now`'s calendar day
    pub todays_return: f64,
}

/// Compute the dashboard's headline figures
///
/// Win rate and averages consider executed trades only; the total trade
/// count covers every status, matching the stat cards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dashboard_summary(
    trades: &[Trade],
    positions: &[Position],
    now: DateTime<Utc>,
) -> DashboardSummary {
    let executed: Vec<&Trade> = trades.iter().filter(|trade| trade.is_executed()).collect();

    let total_pnl: f64 = executed.iter().map(|trade| trade.pnl_or_zero()).sum();
    let wins = executed
        .iter()
        .filter(|trade| trade.pnl_or_zero() > 0.0)
        .count();

    let (win_rate, avg_pnl) = if executed.is_empty() {
        (0.0, 0.0)
    } else {
        (
            wins as f64 / executed.len() as f64 * PERCENT_SCALE,
            total_pnl / executed.len() as f64,
        )
    };

    let today = now.date_naive();
    let todays_return: f64 = executed
        .iter()
        .filter(|trade| {
            trade
                .execution_time
                .is_some_and(|filled| filled.date_naive() == today)
        })
        .map(|trade| trade.pnl_or_zero())
        .sum();

    DashboardSummary {
        total_trades: trades.len(),
        total_pnl,
        avg_pnl,
        win_rate,
        total_position_value: positions.iter().map(|p| p.market_value).sum(),
        todays_return,
    }
}
