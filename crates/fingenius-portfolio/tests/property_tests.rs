//! Property-based tests for portfolio invariants.
//!
//! These tests verify properties that should always hold:
//! - ROI is finite and zero without investment
//! - Sector weights sum to 100% when the portfolio has value
//! - Volatility is non-negative, zero for constant prices
//! - Sharpe is zero whenever volatility is zero

use std::collections::HashMap;

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use fingenius_portfolio::prelude::*;
use fingenius_traits::{DailyClose, Fundamentals, MarketData, PriceHistory, PriceSnapshot, Symbol};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const SECTORS: [&str; 4] = ["Technology", "Energy", "Healthcare", ""];

fn money(cents: u32) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

fn lot_strategy() -> impl Strategy<Value = (usize, u32, u32, u32)> {
    // (symbol index, quantity, purchase cents, current cents)
    (0usize..6, 0u32..1_000, 0u32..100_000, 0u32..100_000)
}

fn build(lots: &[(usize, u32, u32, u32)]) -> (Portfolio, MarketData, HashMap<Symbol, Fundamentals>) {
    let mut portfolio = Portfolio::default();
    let mut snapshot = PriceSnapshot::new();
    let mut fundamentals = HashMap::new();

    for (idx, qty, buy, now) in lots {
        let symbol = format!("S{idx}");
        portfolio = portfolio.with_holding(Holding::new(&symbol, Decimal::from(*qty), money(*buy)).unwrap());
        let symbol = Symbol::parse(&symbol).unwrap();
        snapshot.insert(symbol.clone(), money(*now));
        fundamentals.insert(symbol, Fundamentals::new(SECTORS[idx % SECTORS.len()]));
    }

    (
        portfolio,
        MarketData {
            snapshot,
            history: PriceHistory::new(),
        },
        fundamentals,
    )
}

proptest! {
    #[test]
    fn prop_roi_finite_and_guarded(lots in prop::collection::vec(lot_strategy(), 0..8)) {
        let (portfolio, market, fundamentals) = build(&lots);
        let config = AnalyticsConfig::default();
        let analytics = calculate_portfolio_analytics(&portfolio, &market, &fundamentals, 4.54, &config).unwrap();

        prop_assert!(analytics.roi_percent.is_finite());
        if analytics.total_investment.is_zero() {
            prop_assert_eq!(analytics.roi_percent, 0.0);
        }
        for h in &analytics.holdings {
            prop_assert!(h.roi_percent.is_finite());
        }
    }

    #[test]
    fn prop_sector_weights_sum_to_100(lots in prop::collection::vec(lot_strategy(), 1..8)) {
        let (portfolio, market, fundamentals) = build(&lots);
        let details = holding_details(&portfolio, &market.snapshot, &fundamentals).unwrap();
        let breakdown = bucket_by_sector(&details).unwrap();
        let total_value: Decimal = details.iter().map(|d| d.current_value).sum();

        if total_value > Decimal::ZERO {
            prop_assert!((breakdown.total_percent() - 100.0).abs() < 1e-6);
        } else {
            prop_assert!(breakdown.iter().all(|(_, w)| w == 0.0));
        }
        prop_assert!(breakdown.get("").is_none());
    }

    #[test]
    fn prop_constant_prices_have_zero_volatility(
        prices in prop::collection::vec(1u32..100_000, 1..5),
        days in 2usize..30,
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut history = PriceHistory::new();
        let mut portfolio = Portfolio::default();
        for (i, p) in prices.iter().enumerate() {
            let symbol = Symbol::parse(&format!("C{i}")).unwrap();
            let series = (0..days)
                .map(|d| DailyClose::new(start + Duration::days(d as i64), money(*p)))
                .collect();
            history.insert(symbol.clone(), series);
            portfolio = portfolio.with_holding(Holding::new(symbol.as_str(), Decimal::ONE, money(*p)).unwrap());
        }

        let vol = calculate_volatility(&portfolio, &history, &AnalyticsConfig::default()).unwrap();
        prop_assert_eq!(vol, 0.0);
    }

    #[test]
    fn prop_volatility_non_negative(
        walk in prop::collection::vec(-500i32..500, 2..40),
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut level = 100_000i64;
        let series: Vec<DailyClose> = walk
            .iter()
            .enumerate()
            .map(|(d, step)| {
                level = (level + i64::from(*step)).max(1);
                DailyClose::new(start + Duration::days(d as i64), Decimal::new(level, 3))
            })
            .collect();
        let history = PriceHistory::new().with_series(Symbol::parse("W").unwrap(), series);
        let portfolio = Portfolio::default().with_holding(Holding::new("W", Decimal::TEN, Decimal::ONE).unwrap());

        let est = estimate_volatility(&portfolio, &history, &AnalyticsConfig::default()).unwrap();
        prop_assert!(est.annualized >= 0.0);
        prop_assert!(est.annualized.is_finite());
    }

    #[test]
    fn prop_sharpe_zero_without_volatility(roi in -100.0f64..500.0, rf in -5.0f64..20.0) {
        prop_assert_eq!(sharpe_ratio(roi, 0.0, rf), 0.0);
    }

    #[test]
    fn prop_holding_tiers_are_monotonic(a in -200.0f64..200.0, b in -200.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RoiTier::classify(lo) as u8 <= RoiTier::classify(hi) as u8);
    }
}

#[test]
fn test_tier_boundaries_exact() {
    assert_eq!(RoiTier::classify(-20.0), RoiTier::MildLoss);
    assert_eq!(RoiTier::classify(0.0), RoiTier::LowGain);
    assert_eq!(RoiTier::classify(5.0), RoiTier::ModerateGain);
    assert_eq!(RoiTier::classify(20.0), RoiTier::StrongGain);
    assert_relative_eq!(sharpe_ratio(10.0, 0.0, 4.54), 0.0);
}
