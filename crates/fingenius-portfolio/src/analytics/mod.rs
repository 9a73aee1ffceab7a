//! Portfolio-level analytics.
//!
//! This module provides:
//! - Valuation and ROI
//! - Covariance-weighted annualized volatility
//! - Sharpe-style risk-adjusted return
//! - The combined analytics summary
//!
//! All functions are pure. They take holdings, market data and
//! configuration as input and return computed results.

mod risk;
mod summary;
mod valuation;
mod volatility;

pub use risk::*;
pub use summary::*;
pub use valuation::*;
pub use volatility::*;
