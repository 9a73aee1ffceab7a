//! Domain types for portfolio analytics.
//!
//! - [`Holding`]: A single position as supplied by the caller
//! - [`HoldingDetail`]: Derived valuation of one holding
//! - [`AnalyticsConfig`]: Configuration for analytics computation

mod config;
mod detail;
mod holding;

pub use config::{AnalyticsConfig, DEFAULT_RISK_FREE_RATE, TRADING_DAYS_PER_YEAR};
pub use detail::HoldingDetail;
pub use holding::Holding;
