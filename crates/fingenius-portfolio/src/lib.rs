//! # FinGenius Portfolio
//!
//! Risk/return analytics for equity portfolios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Soft defaults**: Missing prices value at zero, missing sectors are
//!   "Unknown", degenerate denominators give `0.0`
//! - **Exact money**: Invested capital and values use `Decimal`; statistics
//!   use `f64`
//!
//! ## Features
//!
//! - **Valuation**: Invested capital, current value, ROI
//! - **Volatility**: Covariance-weighted annualized volatility
//! - **Risk-adjusted return**: Sharpe-style ratio
//! - **Diversification**: Sector concentration breakdown
//! - **Recommendations**: ROI tiers, concentration and volatility warnings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fingenius_portfolio::prelude::*;
//!
//! let portfolio = Portfolio::default()
//!     .with_holding(Holding::new("AAPL", dec!(10), dec!(150))?)
//!     .with_holding(Holding::new("MSFT", dec!(5), dec!(300))?);
//!
//! let config = AnalyticsConfig::default();
//! let analytics = calculate_portfolio_analytics(
//!     &portfolio,
//!     &market,
//!     &fundamentals,
//!     config.risk_free_rate,
//!     &config,
//! )?;
//! println!("ROI: {:.2}%", analytics.roi_percent);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Valuation, volatility, Sharpe ratio and the summary
//! - [`bucketing`] - Sector breakdown
//! - [`portfolio`] - Portfolio type
//! - [`recommendation`] - Deterministic advice
//! - [`types`] - Core types (Holding, HoldingDetail, Config)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod error;
pub mod portfolio;
pub mod recommendation;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{AnalyticsConfig, Holding, HoldingDetail, DEFAULT_RISK_FREE_RATE, TRADING_DAYS_PER_YEAR};

pub use portfolio::Portfolio;

pub use analytics::{
    calculate_portfolio_analytics, calculate_valuation, calculate_volatility,
    estimate_volatility, holding_details, roi_percent, sharpe_ratio, PortfolioAnalytics,
    ReturnTable, Valuation, VolatilityEstimate,
};

pub use bucketing::{bucket_by_sector, SectorBreakdown};

pub use recommendation::{
    compose_advice, holding_recommendation, portfolio_advice, portfolio_roi_sentence,
    risk_warnings, PortfolioRoiTier, RoiTier, NO_SPECIFIC_ADVICE,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::bucketing::*;
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::Portfolio;
    pub use crate::recommendation::*;
    pub use crate::types::*;
}
