//! Integration tests rolling a realistic month of trades through every
//! aggregation the dashboard consumes

use analytics::{
    TimeWindow, channel_performance, dashboard_summary, equity_curve, overview_stats,
    trader_performance,
};
use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::*;
use services_common::{AssetType, Position, Trade, TradeAction, TradeStatus};

/// Test fixture: a deterministic month of trading across three traders,
/// two channels and mixed statuses.
#[fixture]
fn month_of_trades() -> (Vec<Trade>, DateTime<Utc>) {
    let now = Utc.with_ymd_and_hms(2024, 7, 31, 18, 0, 0).unwrap();
    let mut trades = Vec::new();

    // (trader, channel, asset, pnl, days_ago, status)
    let rows: [(&str, &str, AssetType, Option<f64>, i64, TradeStatus); 9] = [
        ("TradeMaster", "alpha-signals", AssetType::Stock, Some(150.0), 2, TradeStatus::Executed),
        ("TradeMaster", "alpha-signals", AssetType::Stock, Some(-60.0), 5, TradeStatus::Executed),
        ("TradeMaster", "pro-traders", AssetType::Option, Some(40.0), 9, TradeStatus::Executed),
        ("AlphaWolf", "pro-traders", AssetType::Crypto, Some(-90.0), 3, TradeStatus::Executed),
        ("AlphaWolf", "pro-traders", AssetType::Crypto, Some(220.0), 12, TradeStatus::Executed),
        ("MarketGuru", "alpha-signals", AssetType::Stock, Some(0.0), 6, TradeStatus::Executed),
        ("MarketGuru", "alpha-signals", AssetType::Stock, None, 1, TradeStatus::Pending),
        ("TradeMaster", "alpha-signals", AssetType::Stock, None, 4, TradeStatus::Cancelled),
        ("AlphaWolf", "pro-traders", AssetType::Crypto, None, 7, TradeStatus::Failed),
    ];

    for (i, (trader, channel, asset, pnl, days_ago, status)) in rows.into_iter().enumerate() {
        let created = now - chrono::Duration::days(days_ago);
        trades.push(Trade {
            id: i as u64,
            symbol: ["AAPL", "TSLA", "NVDA"][i % 3].to_string(),
            action: TradeAction::Buy,
            quantity: 10,
            price: 150.0,
            asset_type: asset,
            status,
            channel: channel.to_string(),
            trader: Some(trader.to_string()),
            confidence: Some(0.75),
            pnl,
            created_date: created,
            execution_time: (status == TradeStatus::Executed).then_some(created),
        });
    }

    (trades, now)
}

#[rstest]
fn trader_and_summary_totals_agree(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, now) = month_of_trades;

    let traders = trader_performance(&trades);
    let grouped_total: f64 = traders.iter().map(|t| t.total_pnl).sum();

    let summary = dashboard_summary(&trades, &[], now);
    // Every trade with pnl is executed in this fixture, so the executed-only
    // summary total matches the per-trader grouping total.
    assert_relative_eq!(grouped_total, summary.total_pnl);
    assert_eq!(summary.total_trades, trades.len());
}

#[rstest]
fn channel_totals_partition_trader_totals(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, _) = month_of_trades;

    let channels = channel_performance(&trades);
    let channel_total: f64 = channels.iter().map(|c| c.total_pnl).sum();
    let trader_total: f64 = trader_performance(&trades)
        .iter()
        .map(|t| t.total_pnl)
        .sum();
    assert_relative_eq!(channel_total, trader_total);

    let channel_trades: u32 = channels.iter().map(|c| c.trades).sum();
    assert_eq!(channel_trades as usize, trades.len());
}

#[rstest]
fn overview_gross_figures_match_hand_totals(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, now) = month_of_trades;

    let overview = overview_stats(&trades, TimeWindow::Days30, now);
    assert_eq!(overview.total_wins, 3);
    assert_eq!(overview.total_losses, 2);
    assert_relative_eq!(overview.gross_profit, 150.0 + 40.0 + 220.0);
    assert_relative_eq!(overview.gross_loss, 60.0 + 90.0);
    assert_relative_eq!(overview.profit_factor, 410.0 / 150.0);
}

#[rstest]
fn narrow_window_drops_older_trades(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, now) = month_of_trades;

    let week = overview_stats(&trades, TimeWindow::Days7, now);
    // Only the 150, -60, -90 and 0 pnl trades fall inside seven days
    assert_eq!(week.total_wins, 1);
    assert_eq!(week.total_losses, 2);
    assert_relative_eq!(week.gross_profit, 150.0);
}

#[rstest]
fn equity_curves_end_at_trader_totals(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, _) = month_of_trades;

    for trader in trader_performance(&trades) {
        let curve = equity_curve(&trades, &trader.name);
        let final_pnl = curve.last().map_or(0.0, |point| point.pnl);
        assert_relative_eq!(final_pnl, trader.total_pnl, epsilon = 1e-9);
    }
}

#[rstest]
fn summary_includes_position_valuations(month_of_trades: (Vec<Trade>, DateTime<Utc>)) {
    let (trades, now) = month_of_trades;
    let open_date = now - chrono::Duration::days(20);
    let positions = vec![
        Position::new(1, "AAPL".into(), 15, 170.0, 180.0, "alpha-signals".into(), open_date),
        Position::new(2, "NVDA".into(), 8, 95.0, 120.0, "pro-traders".into(), open_date),
    ];

    let summary = dashboard_summary(&trades, &positions, now);
    assert_relative_eq!(summary.total_position_value, 15.0 * 180.0 + 8.0 * 120.0);
}
