//! Dashboard service entrypoint
//!
//! Builds the seeded mock provider, assembles a full dashboard snapshot and
//! emits it as JSON, then lets the simulated metrics run a few ticks so the
//! live tiles have data.

use analytics::TimeWindow;
use anyhow::Result;
use dashboard::{DashboardConfig, DashboardEvent, DashboardService};
use data_provider::{MockDataProvider, ProviderConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "dashboard";
const METRIC_TICKS_SHOWN: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting SignalDeck dashboard v{}", env!("CARGO_PKG_VERSION"));

    let provider = Arc::new(MockDataProvider::new(&ProviderConfig::default()));
    let service = DashboardService::new(provider, DashboardConfig::default());

    let mut events = service.subscribe();
    service.start_metrics_simulation();

    let snapshot = service.snapshot(TimeWindow::Days30).await?;
    info!(
        total_trades = snapshot.summary.total_trades,
        total_pnl = snapshot.summary.total_pnl,
        win_rate = snapshot.summary.win_rate,
        traders = snapshot.traders.len(),
        "Snapshot assembled"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    let mut ticks_seen = 0;
    while ticks_seen < METRIC_TICKS_SHOWN {
        match events.recv().await {
            Ok(DashboardEvent::MetricsUpdated { metrics, .. }) => {
                info!(
                    messages = metrics.messages_processed,
                    signals = metrics.signals_generated,
                    trades = metrics.trades_executed,
                    accuracy = metrics.accuracy,
                    "Live metrics"
                );
                ticks_seen += 1;
            }
            Ok(_) => {}
            Err(e) => {
                anyhow::bail!("Event stream closed: {e}");
            }
        }
    }

    Ok(())
}

/// Initialize tracing with environment filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{SERVICE_NAME}=info,data_provider=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
