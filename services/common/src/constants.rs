//! Shared constants used across all services

// Percentage scale
/// Multiplier converting a 0-1 ratio to a percentage
pub const PERCENT_SCALE: f64 = 100.0;

// Channel evaluation defaults
/// Default win-rate threshold below which a channel is flagged (percent)
pub const DEFAULT_WIN_RATE_THRESHOLD: f64 = 60.0;
/// Default minimum signal confidence a channel accepts (0-1)
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Default number of trades required before a channel is evaluated
pub const DEFAULT_MIN_TRADES_FOR_EVALUATION: u32 = 10;

// Consistency score (see analytics::trader)
/// Neutral consistency score assigned when pnl volatility is zero
pub const NEUTRAL_CONSISTENCY_SCORE: f64 = 50.0;
/// Penalty multiplier applied to the volatility/return ratio
pub const CONSISTENCY_PENALTY_FACTOR: f64 = 20.0;

// Trader risk classification (absolute best-to-worst trade spread)
/// Spread above which a trader is classified high risk
pub const HIGH_RISK_SPREAD: f64 = 500.0;
/// Spread above which a trader is classified medium risk
pub const MEDIUM_RISK_SPREAD: f64 = 200.0;

// Presentation limits
/// Number of symbols shown in the top/worst symbol tables
pub const SYMBOL_TABLE_LIMIT: usize = 5;
/// Default number of recent trades shown on the dashboard
pub const RECENT_TRADES_LIMIT: usize = 50;
