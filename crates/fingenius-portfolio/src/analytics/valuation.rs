//! Invested capital, market value and return on investment.

use fingenius_traits::PriceSnapshot;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{checked_add, PortfolioResult};
use crate::types::Holding;

/// Aggregate valuation of a set of holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Σ purchase_price × quantity.
    pub total_investment: Decimal,

    /// Σ current price × quantity (missing prices count as zero).
    pub current_value: Decimal,

    /// Return on investment in percent.
    pub roi_percent: f64,
}

impl Valuation {
    /// Profit or loss in currency units.
    #[must_use]
    pub fn profit_loss(&self) -> Decimal {
        self.current_value - self.total_investment
    }
}

/// Return on investment in percent.
///
/// Returns `0.0` when nothing was invested (`invested <= 0`), so the result
/// is always finite.
#[must_use]
pub fn roi_percent(invested: Decimal, current: Decimal) -> f64 {
    if invested <= Decimal::ZERO {
        return 0.0;
    }
    (current - invested)
        .checked_div(invested)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64())
        .filter(|pct| pct.is_finite())
        .unwrap_or(0.0)
}

/// Values every holding against the snapshot and aggregates the totals.
///
/// Lots that share a symbol are valued independently at the same price.
///
/// # Errors
///
/// Returns [`PortfolioError::CalculationFailed`](crate::PortfolioError) when
/// a product or a total overflows `Decimal`.
pub fn calculate_valuation(holdings: &[Holding], snapshot: &PriceSnapshot) -> PortfolioResult<Valuation> {
    let (total_investment, current_value) = holdings.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(invested, current), h| -> PortfolioResult<_> {
            Ok((
                checked_add(invested, h.invested()?, "total investment")?,
                checked_add(current, h.value_at(snapshot.price(&h.symbol))?, "current value")?,
            ))
        },
    )?;

    Ok(Valuation {
        total_investment,
        current_value,
        roi_percent: roi_percent(total_investment, current_value),
    })
}
