//! Error types for portfolio analytics.
//!
//! Degenerate inputs (zero investment, zero volatility, missing prices) are
//! not errors; they resolve to defined sentinel values. Errors here mean the
//! input itself is malformed or a computation produced a non-finite number.

use fingenius_math::MathError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// The holding symbol.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid analytics configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },

    /// Calculation failed.
    #[error("Calculation failed: {reason}")]
    CalculationFailed {
        /// The reason the calculation failed.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a calculation failed error.
    #[must_use]
    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        Self::CalculationFailed {
            reason: reason.into(),
        }
    }
}

/// Adds two amounts, failing instead of panicking on `Decimal` overflow.
pub(crate) fn checked_add(total: Decimal, value: Decimal, what: &str) -> PortfolioResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| PortfolioError::calculation_failed(format!("{what} overflows")))
}

impl From<MathError> for PortfolioError {
    fn from(e: MathError) -> Self {
        Self::calculation_failed(e.to_string())
    }
}
