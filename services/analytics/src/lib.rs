//! Trading analytics aggregation
//!
//! Transforms flat trade collections into the grouped statistics the
//! dashboard renders:
//! - Per-trader performance (win rate, pnl, Sharpe-like ratio, consistency)
//! - Per-trader cumulative equity curves
//! - Per-channel win/loss breakdowns
//! - Time-windowed overview statistics (profit factor, symbol tables)
//! - Dashboard headline summary
//!
//! Every function here is pure and total: no I/O, no state between calls,
//! and every division guards the zero denominator with a defined fallback
//! instead of failing. Empty input yields empty (or zeroed) output.

pub mod channel;
pub mod overview;
pub mod summary;
pub mod trader;

pub use channel::{ChannelPerformance, channel_performance};
pub use overview::{
    DailyCount, DailyPnl, OverviewStats, SymbolPnl, TimeWindow, asset_distribution, pnl_by_day,
    overview_stats, trade_volume_by_day,
};
pub use summary::{DashboardSummary, dashboard_summary};
pub use trader::{
    EquityPoint, RiskLevel, RiskReturnPoint, TraderPerformance, TraderSort, equity_curve,
    risk_level, risk_vs_return, sort_traders, trader_performance,
};
