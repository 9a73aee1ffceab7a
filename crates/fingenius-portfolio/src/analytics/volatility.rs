//! Covariance-weighted annualized portfolio volatility.
//!
//! Daily closes are aligned on the union of their dates, converted to simple
//! returns, and combined through the sample covariance matrix:
//!
//! ```text
//! σ_annual = sqrt(wᵀ Σ w × trading_days)
//! ```
//!
//! where `w` are position weights from the latest close of each symbol.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use fingenius_math::linear_algebra::quadratic_form;
use fingenius_math::statistics::{covariance_matrix, simple_returns};
use fingenius_traits::{PriceHistory, Symbol};
use nalgebra::DVector;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::Portfolio;
use crate::types::AnalyticsConfig;

/// Daily simple returns aligned by date, one column per symbol.
///
/// Symbols without any close are not represented. Rows where every return
/// is missing are removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnTable {
    symbols: Vec<Symbol>,
    dates: Vec<NaiveDate>,
    columns: Vec<Vec<Option<f64>>>,
}

impl ReturnTable {
    /// Builds the table for the requested symbols.
    ///
    /// Each return is dated by its closing day.
    #[must_use]
    pub fn from_history(history: &PriceHistory, symbols: &[Symbol]) -> Self {
        let mut present: Vec<(Symbol, HashMap<NaiveDate, f64>)> = Vec::new();
        for symbol in symbols {
            if present.iter().any(|(s, _)| s == symbol) {
                continue;
            }
            let closes: HashMap<NaiveDate, f64> = history
                .series(symbol)
                .iter()
                .filter_map(|p| p.close.to_f64().map(|c| (p.date, c)))
                .collect();
            if !closes.is_empty() {
                present.push((symbol.clone(), closes));
            }
        }

        let all_dates: Vec<NaiveDate> = present
            .iter()
            .flat_map(|(_, closes)| closes.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let raw: Vec<Vec<Option<f64>>> = present
            .iter()
            .map(|(_, closes)| {
                let aligned: Vec<Option<f64>> =
                    all_dates.iter().map(|d| closes.get(d).copied()).collect();
                simple_returns(&aligned)
            })
            .collect();

        // Row i of `raw` is the return into all_dates[i + 1].
        let keep: Vec<usize> = (0..all_dates.len().saturating_sub(1))
            .filter(|&row| raw.iter().any(|col| col[row].is_some()))
            .collect();

        Self {
            symbols: present.into_iter().map(|(s, _)| s).collect(),
            dates: keep.iter().map(|&row| all_dates[row + 1]).collect(),
            columns: raw
                .iter()
                .map(|col| keep.iter().map(|&row| col[row]).collect())
                .collect(),
        }
    }

    /// Symbols with at least one close, in request order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Dates of the retained return rows.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Return column for one symbol.
    #[must_use]
    pub fn column(&self, symbol: &Symbol) -> Option<&[Option<f64>]> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| self.columns[i].as_slice())
    }

    /// All return columns in symbol order.
    #[must_use]
    pub fn columns(&self) -> &[Vec<Option<f64>>] {
        &self.columns
    }

    /// Number of retained return rows.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no symbol has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Result of a volatility estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolatilityEstimate {
    /// Annualized volatility as a decimal (0.25 = 25%).
    pub annualized: f64,

    /// Daily portfolio variance `wᵀ Σ w` before annualization.
    pub daily_variance: f64,

    /// Position weight per symbol that contributed to the estimate.
    pub weights: Vec<(Symbol, f64)>,

    /// Number of daily return rows used.
    pub observations: usize,
}

/// Estimates annualized portfolio volatility from daily close history.
///
/// Weights are the latest close of each symbol times its total quantity,
/// normalized by the sum. Missing history or a zero total position value
/// produces a zero estimate.
///
/// # Errors
///
/// Returns [`PortfolioError::CalculationFailed`](crate::PortfolioError) when
/// the covariance quadratic form cannot be evaluated (non-finite inputs).
pub fn estimate_volatility(
    portfolio: &Portfolio,
    history: &PriceHistory,
    config: &AnalyticsConfig,
) -> PortfolioResult<VolatilityEstimate> {
    let table = ReturnTable::from_history(history, &portfolio.unique_symbols());
    if table.is_empty() {
        return Ok(VolatilityEstimate::default());
    }

    let quantities = portfolio.quantity_by_symbol()?;
    let values = table
        .symbols()
        .iter()
        .map(|symbol| {
            let last = history.last_close(symbol).unwrap_or(Decimal::ZERO);
            let qty = quantities.get(symbol).copied().unwrap_or(Decimal::ZERO);
            last.checked_mul(qty)
                .map(|v| v.to_f64().unwrap_or(0.0))
                .ok_or_else(|| {
                    PortfolioError::calculation_failed(format!("position value of {symbol} overflows"))
                })
        })
        .collect::<PortfolioResult<Vec<f64>>>()?;

    let total: f64 = values.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Ok(VolatilityEstimate {
            observations: table.observations(),
            ..VolatilityEstimate::default()
        });
    }

    let weights = DVector::from_iterator(values.len(), values.iter().map(|v| v / total));
    let cov = covariance_matrix(table.columns())?;
    let daily_variance = quadratic_form(&cov, &weights)?.max(0.0);
    let annualized = (daily_variance * config.trading_days_per_year).sqrt();

    Ok(VolatilityEstimate {
        annualized,
        daily_variance,
        weights: table
            .symbols()
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect(),
        observations: table.observations(),
    })
}

/// Annualized portfolio volatility as a decimal.
///
/// # Errors
///
/// See [`estimate_volatility`].
pub fn calculate_volatility(
    portfolio: &Portfolio,
    history: &PriceHistory,
    config: &AnalyticsConfig,
) -> PortfolioResult<f64> {
    estimate_volatility(portfolio, history, config).map(|e| e.annualized)
}
