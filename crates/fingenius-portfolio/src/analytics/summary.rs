//! Portfolio analytics summary.
//!
//! Combines valuation, per-holding details, volatility, the Sharpe ratio,
//! the sector breakdown and deterministic advice in one pass.

use std::collections::HashMap;

use fingenius_traits::{Fundamentals, MarketData, PriceSnapshot, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{calculate_valuation, estimate_volatility, roi_percent, sharpe_ratio};
use crate::bucketing::{bucket_by_sector, SectorBreakdown};
use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::Portfolio;
use crate::recommendation::{holding_recommendation, portfolio_advice};
use crate::types::{AnalyticsConfig, HoldingDetail};

/// Deterministic portfolio analytics.
///
/// This is everything about a portfolio that can be computed without a
/// narrative advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalytics {
    /// Total capital invested.
    pub total_investment: Decimal,

    /// Total current market value.
    pub current_value: Decimal,

    /// Portfolio ROI in percent.
    pub roi_percent: f64,

    /// Annualized volatility as a decimal.
    pub volatility: f64,

    /// Sharpe-style ratio.
    pub sharpe_ratio: f64,

    /// One detail per input holding, in input order.
    pub holdings: Vec<HoldingDetail>,

    /// Sector label → percent of current value.
    pub sector_breakdown: SectorBreakdown,

    /// Deterministic advice text.
    pub local_advice: String,
}

impl PortfolioAnalytics {
    /// Profit or loss in currency units.
    #[must_use]
    pub fn profit_loss(&self) -> Decimal {
        self.current_value - self.total_investment
    }

    /// Number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }
}

/// Builds the per-holding details.
///
/// Symbols missing from the snapshot are priced at zero. Symbols missing
/// from `fundamentals` get the "Unknown" sector.
///
/// # Errors
///
/// Returns [`PortfolioError::CalculationFailed`] when a holding's value
/// overflows `Decimal`.
pub fn holding_details(
    portfolio: &Portfolio,
    snapshot: &PriceSnapshot,
    fundamentals: &HashMap<Symbol, Fundamentals>,
) -> PortfolioResult<Vec<HoldingDetail>> {
    portfolio
        .holdings()
        .iter()
        .map(|h| {
            let current_price = snapshot.price(&h.symbol);
            let invested_amount = h.invested()?;
            let current_value = h.value_at(current_price)?;
            let roi = roi_percent(invested_amount, current_value);
            let info = fundamentals.get(&h.symbol).cloned().unwrap_or_default();

            Ok(HoldingDetail {
                symbol: h.symbol.clone(),
                quantity: h.quantity,
                purchase_price: h.purchase_price,
                current_price,
                invested_amount,
                current_value,
                profit_loss: current_value - invested_amount,
                roi_percent: roi,
                sector: info.sector,
                valuation_multiple: info.valuation_multiple,
                recommendation: holding_recommendation(&h.symbol, roi),
            })
        })
        .collect()
}

/// Calculates the complete deterministic analytics for a portfolio.
///
/// # Errors
///
/// - [`PortfolioError::InvalidHolding`] if any holding is invalid
/// - [`PortfolioError::InvalidConfig`] if the configuration is invalid
/// - [`PortfolioError::CalculationFailed`] if any metric is not finite or
///   an amount overflows
pub fn calculate_portfolio_analytics(
    portfolio: &Portfolio,
    market: &MarketData,
    fundamentals: &HashMap<Symbol, Fundamentals>,
    risk_free_rate: f64,
    config: &AnalyticsConfig,
) -> PortfolioResult<PortfolioAnalytics> {
    portfolio.validate()?;
    config.validate()?;
    if !risk_free_rate.is_finite() {
        return Err(PortfolioError::invalid_config("risk-free rate must be finite"));
    }

    let valuation = calculate_valuation(portfolio.holdings(), &market.snapshot)?;
    let holdings = holding_details(portfolio, &market.snapshot, fundamentals)?;
    let volatility = estimate_volatility(portfolio, &market.history, config)?.annualized;
    let sharpe = sharpe_ratio(valuation.roi_percent, volatility, risk_free_rate);
    let sector_breakdown = bucket_by_sector(&holdings)?;

    ensure_finite("roi_percent", valuation.roi_percent)?;
    ensure_finite("volatility", volatility)?;
    ensure_finite("sharpe_ratio", sharpe)?;
    for detail in &holdings {
        ensure_finite(&format!("roi_percent for {}", detail.symbol), detail.roi_percent)?;
    }
    for (sector, weight) in sector_breakdown.iter() {
        ensure_finite(&format!("weight of {sector}"), weight)?;
    }

    let local_advice = portfolio_advice(valuation.roi_percent, &sector_breakdown, volatility, config);

    Ok(PortfolioAnalytics {
        total_investment: valuation.total_investment,
        current_value: valuation.current_value,
        roi_percent: valuation.roi_percent,
        volatility,
        sharpe_ratio: sharpe,
        holdings,
        sector_breakdown,
        local_advice,
    })
}

fn ensure_finite(name: &str, value: f64) -> PortfolioResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PortfolioError::calculation_failed(format!("{name} is not finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holding;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn sym(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    #[test]
    fn test_details_use_fallbacks() {
        let portfolio = Portfolio::default().with_holding(Holding::new("XYZ", dec!(2), dec!(10)).unwrap());
        let details = holding_details(&portfolio, &PriceSnapshot::new(), &HashMap::new()).unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].sector, "Unknown");
        assert_eq!(details[0].current_value, Decimal::ZERO);
        assert_eq!(details[0].profit_loss, dec!(-20));
        assert_relative_eq!(details[0].roi_percent, -100.0);
    }

    #[test]
    fn test_details_carry_fundamentals() {
        let portfolio = Portfolio::default().with_holding(Holding::new("AAPL", dec!(1), dec!(100)).unwrap());
        let snapshot = PriceSnapshot::new().with_price(sym("AAPL"), dec!(125));
        let fundamentals = HashMap::from([(
            sym("AAPL"),
            Fundamentals::new("Technology").with_valuation_multiple(28.5),
        )]);

        let details = holding_details(&portfolio, &snapshot, &fundamentals).unwrap();
        assert_eq!(details[0].sector, "Technology");
        assert_eq!(details[0].valuation_multiple, Some(28.5));
        assert!(details[0].recommendation.contains("partial profits"));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let bad: Portfolio = serde_json::from_str(
            r#"{"items": [{"symbol": "AAPL", "quantity": -1, "purchase_price": 1}]}"#,
        )
        .unwrap();
        let result = calculate_portfolio_analytics(
            &bad,
            &MarketData::empty(),
            &HashMap::new(),
            4.54,
            &AnalyticsConfig::default(),
        );
        assert!(matches!(result, Err(PortfolioError::InvalidHolding { .. })));

        let result = calculate_portfolio_analytics(
            &Portfolio::default(),
            &MarketData::empty(),
            &HashMap::new(),
            f64::NAN,
            &AnalyticsConfig::default(),
        );
        assert!(matches!(result, Err(PortfolioError::InvalidConfig { .. })));
    }
}
