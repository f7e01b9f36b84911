//! Simulated live system metrics
//!
//! The original system surfaces pipeline counters (messages seen, signals
//! generated, trades executed) from its ingestion side. With no live feed
//! attached, a seeded simulator advances the counters on a timer so the
//! dashboard's live tiles have something to render.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Accuracy floor for the simulated model-accuracy gauge (percent)
const ACCURACY_BASE: f64 = 65.0;
/// Random accuracy spread above the floor (percent)
const ACCURACY_SPREAD: f64 = 20.0;

/// Live pipeline counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Channel messages ingested since startup
    pub messages_processed: u64,
    /// Signals extracted from those messages
    pub signals_generated: u64,
    /// Trades placed off those signals
    pub trades_executed: u64,
    /// Simulated signal-model accuracy (percent, capped at 100)
    pub accuracy: f64,
}

/// Seeded random walk over [`SystemMetrics`]
#[derive(Debug)]
pub struct MetricsSimulator {
    metrics: SystemMetrics,
    rng: StdRng,
}

impl MetricsSimulator {
    /// Create a simulator with all counters at zero
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            metrics: SystemMetrics::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance one tick and return the updated counters
    ///
    /// Counters are monotonic; accuracy floats between the base and 100.
    pub fn tick(&mut self) -> SystemMetrics {
        self.metrics.messages_processed += self.rng.gen_range(0..3);
        if self.rng.gen_bool(0.3) {
            self.metrics.signals_generated += 1;
        }
        if self.rng.gen_bool(0.2) {
            self.metrics.trades_executed += 1;
        }
        self.metrics.accuracy =
            (ACCURACY_BASE + self.rng.gen_range(0.0..ACCURACY_SPREAD)).min(100.0);
        self.metrics
    }

    /// Latest counters without advancing
    #[must_use]
    pub const fn current(&self) -> SystemMetrics {
        self.metrics
    }
}
