//! # FinGenius Ext File
//!
//! File-based collaborators for the FinGenius analysis engine.
//!
//! This crate provides default implementations for offline use, batch runs
//! and tests:
//! - CSV daily close source (`date,symbol,close`)
//! - JSON fundamentals source
//! - Static macro data and static advisor
//! - Empty sources that exercise the engine's fallbacks
//!
//! For live data, implement the `fingenius-traits` collaborator traits
//! against a market data API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod advisory;
mod macro_data;
mod market_data;
mod reference_data;

pub use advisory::*;
pub use macro_data::*;
pub use market_data::*;
pub use reference_data::*;

use std::path::Path;
use std::sync::Arc;

use fingenius_traits::{FundamentalsSource, PriceHistoryProvider, TraitError};

/// Create a CSV price source limited to a trailing window.
pub fn create_file_prices(
    prices_csv: impl AsRef<Path>,
    window_days: u32,
) -> Result<Arc<dyn PriceHistoryProvider>, TraitError> {
    Ok(Arc::new(CsvPriceHistorySource::new(prices_csv, window_days)?))
}

/// Create a JSON fundamentals source, or an empty one when no file is given.
pub fn create_file_fundamentals(
    fundamentals_json: Option<&Path>,
) -> Result<Arc<dyn FundamentalsSource>, TraitError> {
    match fundamentals_json {
        Some(path) => Ok(Arc::new(JsonFundamentalsSource::new(path)?)),
        None => Ok(Arc::new(EmptyFundamentalsSource)),
    }
}
