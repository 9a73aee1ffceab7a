//! Holding representation.

use fingenius_traits::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// A single position as supplied by the caller.
///
/// Several holdings may share a symbol (separate purchase lots). They are
/// valued independently and merged only for price lookups and weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (canonical upper case).
    pub symbol: Symbol,

    /// Number of shares/units held.
    pub quantity: Decimal,

    /// Cost basis per unit.
    pub purchase_price: Decimal,
}

impl Holding {
    /// Creates a validated holding.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidHolding`] for a blank symbol, a
    /// negative quantity or a negative purchase price.
    pub fn new(symbol: &str, quantity: Decimal, purchase_price: Decimal) -> PortfolioResult<Self> {
        let symbol =
            Symbol::parse(symbol).map_err(|e| PortfolioError::invalid_holding(symbol, e.to_string()))?;
        let holding = Self {
            symbol,
            quantity,
            purchase_price,
        };
        holding.validate()?;
        Ok(holding)
    }

    /// Checks the numeric invariants of a holding.
    ///
    /// Deserialized holdings bypass [`Holding::new`], so callers that accept
    /// external input validate before computing.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.quantity < Decimal::ZERO {
            return Err(PortfolioError::invalid_holding(
                self.symbol.as_str(),
                format!("quantity must not be negative (got {})", self.quantity),
            ));
        }
        if self.purchase_price < Decimal::ZERO {
            return Err(PortfolioError::invalid_holding(
                self.symbol.as_str(),
                format!("purchase price must not be negative (got {})", self.purchase_price),
            ));
        }
        Ok(())
    }

    /// Capital invested in this holding (`purchase_price × quantity`).
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::CalculationFailed`] when the product
    /// overflows `Decimal`.
    pub fn invested(&self) -> PortfolioResult<Decimal> {
        self.value_at(self.purchase_price)
    }

    /// Market value at the given unit price.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::CalculationFailed`] when the product
    /// overflows `Decimal`.
    pub fn value_at(&self, price: Decimal) -> PortfolioResult<Decimal> {
        price.checked_mul(self.quantity).ok_or_else(|| {
            PortfolioError::calculation_failed(format!(
                "value of {} overflows ({} x {price})",
                self.symbol, self.quantity
            ))
        })
    }
}
