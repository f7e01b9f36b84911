//! Signal channels and their win-rate evaluation

use crate::constants::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MIN_TRADES_FOR_EVALUATION, DEFAULT_WIN_RATE_THRESHOLD,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signal channel feeding trades into the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Whether signals from this channel are currently acted on
    pub is_active: bool,
    /// Lifetime number of trades attributed to the channel
    pub total_trades: u32,
    /// Lifetime win rate (percent)
    pub win_rate: f64,
    /// Lifetime realized pnl
    pub total_pnl: f64,
    /// Minimum signal confidence accepted (0-1)
    pub confidence_threshold: f64,
    /// Win rate (percent) below which the channel is flagged
    pub win_rate_threshold: f64,
    /// Trades required before the win-rate evaluation applies
    pub min_trades_for_evaluation: u32,
    /// Whether a failing evaluation disables the channel automatically
    pub auto_disable_enabled: bool,
    /// Reason recorded when the channel was disabled, if it was
    pub disabled_reason: Option<String>,
    /// Time of the last message seen on the channel
    pub last_message: DateTime<Utc>,
    /// Time the channel was registered
    pub created_date: DateTime<Utc>,
}

/// Outcome of evaluating a channel against its win-rate thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelEvaluation {
    /// Not enough trades yet to evaluate
    Pending {
        /// Additional trades required before evaluation applies
        trades_needed: u32,
    },
    /// Win rate meets the configured threshold
    Healthy,
    /// Win rate is below the configured threshold
    BelowThreshold,
}

/// In-place field updates applied to a channel
///
/// Absent fields are left untouched, mirroring a partial update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelUpdate {
    /// Toggle or set the active flag
    pub is_active: Option<bool>,
    /// New minimum signal confidence
    pub confidence_threshold: Option<f64>,
    /// New win-rate threshold (percent)
    pub win_rate_threshold: Option<f64>,
    /// New evaluation trade minimum
    pub min_trades_for_evaluation: Option<u32>,
    /// Enable or disable automatic shutoff
    pub auto_disable_enabled: Option<bool>,
}

impl Channel {
    /// Evaluate the channel against its configured thresholds
    #[must_use]
    pub fn evaluation(&self) -> ChannelEvaluation {
        if self.total_trades < self.min_trades_for_evaluation {
            return ChannelEvaluation::Pending {
                trades_needed: self.min_trades_for_evaluation - self.total_trades,
            };
        }
        if self.win_rate >= self.win_rate_threshold {
            ChannelEvaluation::Healthy
        } else {
            ChannelEvaluation::BelowThreshold
        }
    }

    /// Reason string recorded when auto-disable fires
    ///
    /// Returns `None` unless auto-disable is enabled and the evaluation
    /// fails outright (a pending channel is never disabled).
    #[must_use]
    pub fn auto_disable_reason(&self) -> Option<String> {
        if !self.auto_disable_enabled {
            return None;
        }
        match self.evaluation() {
            ChannelEvaluation::BelowThreshold => Some(format!(
                "Auto-disabled: Win rate {:.1}% below {}% threshold",
                self.win_rate, self.win_rate_threshold
            )),
            _ => None,
        }
    }

    /// Apply a partial update to the channel's configurable fields
    pub fn apply_update(&mut self, update: &ChannelUpdate) {
        if let Some(active) = update.is_active {
            self.is_active = active;
            if active {
                self.disabled_reason = None;
            }
        }
        if let Some(threshold) = update.confidence_threshold {
            self.confidence_threshold = threshold;
        }
        if let Some(threshold) = update.win_rate_threshold {
            self.win_rate_threshold = threshold;
        }
        if let Some(min_trades) = update.min_trades_for_evaluation {
            self.min_trades_for_evaluation = min_trades;
        }
        if let Some(enabled) = update.auto_disable_enabled {
            self.auto_disable_enabled = enabled;
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            is_active: true,
            total_trades: 0,
            win_rate: 0.0,
            total_pnl: 0.0,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            win_rate_threshold: DEFAULT_WIN_RATE_THRESHOLD,
            min_trades_for_evaluation: DEFAULT_MIN_TRADES_FOR_EVALUATION,
            auto_disable_enabled: false,
            disabled_reason: None,
            last_message: now,
            created_date: now,
        }
    }
}
