//! Property-based tests for the aggregation invariants

use analytics::trader_performance;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use services_common::{AssetType, Trade, TradeAction, TradeStatus};

/// Strategy: an arbitrary trade with integer-valued pnl so float sums stay
/// exact, spread over a handful of traders, channels and asset classes.
fn arb_trade() -> impl Strategy<Value = Trade> {
    (
        proptest::option::of(0u8..4),
        proptest::option::of(-500i32..500),
        0u8..3,
        0u8..3,
        0i64..30,
    )
        .prop_map(|(trader_idx, pnl, channel_idx, asset_idx, day_offset)| {
            let traders = ["TradeMaster", "AlphaWolf", "MarketGuru", "CryptoKing"];
            let channels = ["alpha-signals", "pro-traders", "market-movers"];
            let assets = [AssetType::Stock, AssetType::Option, AssetType::Crypto];
            let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
                + chrono::Duration::days(day_offset);
            Trade {
                id: 0,
                symbol: "AAPL".to_string(),
                action: TradeAction::Buy,
                quantity: 1,
                price: 100.0,
                asset_type: assets[asset_idx as usize],
                status: TradeStatus::Executed,
                channel: channels[channel_idx as usize].to_string(),
                trader: trader_idx.map(|i| traders[i as usize].to_string()),
                confidence: None,
                pnl: pnl.map(f64::from),
                created_date: created,
                execution_time: Some(created),
            }
        })
}

proptest! {
    #[test]
    fn per_trader_pnl_sums_conserve_total(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        let input_total: f64 = trades.iter().map(Trade::pnl_or_zero).sum();
        let stats = trader_performance(&trades);
        let grouped_total: f64 = stats.iter().map(|s| s.total_pnl).sum();
        prop_assert!((input_total - grouped_total).abs() < 1e-9);
    }

    #[test]
    fn wins_plus_losses_never_exceed_trade_count(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        for stats in trader_performance(&trades) {
            prop_assert!(stats.wins + stats.losses <= stats.total_trades);
        }
    }

    #[test]
    fn trade_counts_partition_the_input(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        let stats = trader_performance(&trades);
        let counted: u32 = stats.iter().map(|s| s.total_trades).sum();
        prop_assert_eq!(counted as usize, trades.len());
    }

    #[test]
    fn consistency_score_stays_in_bounds(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        for stats in trader_performance(&trades) {
            prop_assert!(stats.consistency_score >= 0.0);
            prop_assert!(stats.consistency_score <= 100.0);
        }
    }

    #[test]
    fn win_rate_is_a_percentage(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        for stats in trader_performance(&trades) {
            prop_assert!(stats.win_rate >= 0.0);
            prop_assert!(stats.win_rate <= 100.0);
        }
    }

    #[test]
    fn aggregation_is_idempotent(trades in proptest::collection::vec(arb_trade(), 0..60)) {
        let first = serde_json::to_value(trader_performance(&trades)).unwrap();
        let second = serde_json::to_value(trader_performance(&trades)).unwrap();
        prop_assert_eq!(first, second);
    }
}
