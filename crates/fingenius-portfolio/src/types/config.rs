//! Configuration for portfolio analytics computation.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Default annual risk-free rate, in percent.
pub const DEFAULT_RISK_FREE_RATE: f64 = 4.54;

/// Trading days used to annualize daily variance.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Configuration for portfolio analytics computation.
///
/// Controls annualization, the default risk-free rate and the thresholds
/// used by the deterministic recommendation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Annual risk-free rate in percent (e.g. 4.54 for 4.54%).
    pub risk_free_rate: f64,

    /// Trading days per year for annualizing daily variance.
    pub trading_days_per_year: f64,

    /// Sector weight (percent) above which a concentration warning is given.
    pub concentration_threshold_pct: f64,

    /// Annualized volatility (decimal) above which a volatility warning is given.
    pub volatility_warning_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            concentration_threshold_pct: 50.0,
            volatility_warning_threshold: 0.3,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the risk-free rate (percent).
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the number of trading days per year.
    #[must_use]
    pub fn with_trading_days(mut self, days: f64) -> Self {
        self.trading_days_per_year = days;
        self
    }

    /// Sets the sector concentration warning threshold (percent).
    #[must_use]
    pub fn with_concentration_threshold(mut self, pct: f64) -> Self {
        self.concentration_threshold_pct = pct;
        self
    }

    /// Sets the volatility warning threshold (decimal).
    #[must_use]
    pub fn with_volatility_threshold(mut self, threshold: f64) -> Self {
        self.volatility_warning_threshold = threshold;
        self
    }

    /// Checks that every parameter is finite and in range.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(PortfolioError::invalid_config("risk_free_rate must be finite"));
        }
        if !(self.trading_days_per_year.is_finite() && self.trading_days_per_year > 0.0) {
            return Err(PortfolioError::invalid_config(
                "trading_days_per_year must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.concentration_threshold_pct) {
            return Err(PortfolioError::invalid_config(
                "concentration_threshold_pct must be within [0, 100]",
            ));
        }
        if !(self.volatility_warning_threshold.is_finite() && self.volatility_warning_threshold >= 0.0)
        {
            return Err(PortfolioError::invalid_config(
                "volatility_warning_threshold must be non-negative",
            ));
        }
        Ok(())
    }
}
