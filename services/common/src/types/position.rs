//! Open positions with derived valuation fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open position
///
/// `market_value` and `unrealized_pnl` are derived from the other fields;
/// the constructor and `set_current_price` keep the invariants
/// `market_value = quantity * current_price` and
/// `unrealized_pnl = (current_price - avg_price) * quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Unique position identifier
    pub id: u64,
    /// Ticker symbol
    pub symbol: String,
    /// Units held
    pub quantity: u32,
    /// Average entry price
    pub avg_price: f64,
    /// Latest mark price
    pub current_price: f64,
    /// quantity * `current_price`
    pub market_value: f64,
    /// (`current_price` - `avg_price`) * quantity
    pub unrealized_pnl: f64,
    /// Signal channel that opened the position
    pub channel: String,
    /// Time the position was opened
    pub open_date: DateTime<Utc>,
}

impl Position {
    /// Create a position, computing the derived valuation fields
    #[must_use]
    pub fn new(
        id: u64,
        symbol: String,
        quantity: u32,
        avg_price: f64,
        current_price: f64,
        channel: String,
        open_date: DateTime<Utc>,
    ) -> Self {
        let mut position = Self {
            id,
            symbol,
            quantity,
            avg_price,
            current_price,
            market_value: 0.0,
            unrealized_pnl: 0.0,
            channel,
            open_date,
        };
        position.recompute();
        position
    }

    /// Update the mark price, re-establishing the valuation invariants
    pub fn set_current_price(&mut self, price: f64) {
        self.current_price = price;
        self.recompute();
    }

    fn recompute(&mut self) {
        let qty = f64::from(self.quantity);
        self.market_value = qty * self.current_price;
        self.unrealized_pnl = (self.current_price - self.avg_price) * qty;
    }
}
