//! Tests for windowed overview statistics and chart feeds

use analytics::{TimeWindow, overview_stats, pnl_by_day, trade_volume_by_day};
use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use rstest::*;
use services_common::{AssetType, Trade, TradeAction, TradeStatus};

/// Test fixture for "now": mid-afternoon on 2024-06-15
#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 15, 30, 0).unwrap()
}

fn executed_trade(symbol: &str, pnl: f64, days_ago: i64, now: DateTime<Utc>) -> Trade {
    let created = now - chrono::Duration::days(days_ago);
    Trade {
        id: 0,
        symbol: symbol.to_string(),
        action: TradeAction::Buy,
        quantity: 1,
        price: 100.0,
        asset_type: AssetType::Stock,
        status: TradeStatus::Executed,
        channel: "alpha-signals".to_string(),
        trader: Some("TradeMaster".to_string()),
        confidence: Some(0.8),
        pnl: Some(pnl),
        created_date: created,
        execution_time: Some(created),
    }
}

#[rstest]
#[case(TimeWindow::Days7, 7)]
#[case(TimeWindow::Days30, 30)]
#[case(TimeWindow::Days90, 90)]
fn window_lengths(#[case] window: TimeWindow, #[case] expected_days: i64) {
    assert_eq!(window.days(), expected_days);
}

#[rstest]
#[case(TimeWindow::Days7)]
#[case(TimeWindow::Days30)]
#[case(TimeWindow::Days90)]
fn trades_outside_the_window_are_dropped(now: DateTime<Utc>, #[case] window: TimeWindow) {
    let inside = executed_trade("AAPL", 10.0, window.days() - 1, now);
    let outside = executed_trade("AAPL", 99.0, window.days() + 1, now);

    let stats = overview_stats(&[inside, outside], window, now);
    assert_eq!(stats.total_wins, 1);
    assert_relative_eq!(stats.gross_profit, 10.0);
}

#[rstest]
fn profit_factor_is_gross_ratio(now: DateTime<Utc>) {
    let trades = vec![
        executed_trade("AAPL", 90.0, 1, now),
        executed_trade("TSLA", 30.0, 2, now),
        executed_trade("NVDA", -40.0, 3, now),
    ];
    let stats = overview_stats(&trades, TimeWindow::Days30, now);
    assert_relative_eq!(stats.profit_factor, 3.0);
}

#[rstest]
fn no_losses_yields_infinity_sentinel(now: DateTime<Utc>) {
    // gross_profit = 100, gross_loss = 0: sentinel, not a runtime error
    let trades = vec![executed_trade("AAPL", 100.0, 1, now)];
    let stats = overview_stats(&trades, TimeWindow::Days30, now);
    assert!(stats.profit_factor.is_infinite());
    assert!(stats.profit_factor > 0.0);
}

#[rstest]
fn symbol_pnl_totals_accumulate_per_symbol(now: DateTime<Utc>) {
    let trades = vec![
        executed_trade("AAPL", 30.0, 1, now),
        executed_trade("AAPL", -10.0, 2, now),
        executed_trade("TSLA", 5.0, 3, now),
    ];
    let stats = overview_stats(&trades, TimeWindow::Days30, now);
    assert_eq!(stats.top_symbols[0].symbol, "AAPL");
    assert_relative_eq!(stats.top_symbols[0].pnl, 20.0);
}

#[rstest]
fn fewer_symbols_than_table_limit_overlap(now: DateTime<Utc>) {
    // With two symbols both tables contain both, mirroring the source UI
    let trades = vec![
        executed_trade("AAPL", 30.0, 1, now),
        executed_trade("TSLA", -5.0, 2, now),
    ];
    let stats = overview_stats(&trades, TimeWindow::Days30, now);
    assert_eq!(stats.top_symbols.len(), 2);
    assert_eq!(stats.worst_symbols.len(), 2);
    assert_eq!(stats.worst_symbols[0].symbol, "TSLA");
}

#[rstest]
fn daily_feeds_agree_on_day_labels(now: DateTime<Utc>) {
    let trades = vec![
        executed_trade("AAPL", 10.0, 2, now),
        executed_trade("TSLA", -2.0, 2, now),
    ];
    let pnl = pnl_by_day(&trades, TimeWindow::Days7, now);
    let volume = trade_volume_by_day(&trades, TimeWindow::Days7, now);
    assert_eq!(pnl.len(), 1);
    assert_eq!(volume.len(), 1);
    assert_eq!(pnl[0].date, volume[0].date);
    assert_relative_eq!(pnl[0].pnl, 8.0);
    assert_eq!(volume[0].count, 2);
}

#[rstest]
fn repeated_runs_are_identical(now: DateTime<Utc>) {
    let trades = vec![
        executed_trade("AAPL", 30.0, 1, now),
        executed_trade("TSLA", -5.0, 4, now),
        executed_trade("NVDA", 12.0, 9, now),
    ];
    let first = overview_stats(&trades, TimeWindow::Days30, now);
    let second = overview_stats(&trades, TimeWindow::Days30, now);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
