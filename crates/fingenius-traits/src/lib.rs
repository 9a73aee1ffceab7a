//! # FinGenius Traits
//!
//! Collaborator trait definitions for the FinGenius analytics engine.
//!
//! This crate contains trait definitions and the plain value types that cross
//! them. Implementations live in extension crates (`fingenius-ext-file`) or
//! in the caller's application.
//!
//! ## Module Structure
//!
//! - [`ids`]: Canonical ticker [`Symbol`]
//! - [`market_data`]: Latest prices and daily close histories
//! - [`reference_data`]: Sector, valuation multiple and analyst ratings
//! - [`macro_data`]: Interest rate, inflation and GDP growth
//! - [`advisory`]: Narrative commentary over computed facts
//!
//! ## Dependency Injection
//!
//! The analysis engine uses these traits via dependency injection:
//!
//! ```ignore
//! AnalysisEngineBuilder::new()
//!     .with_prices(Arc::new(impl PriceHistoryProvider))
//!     .with_fundamentals(Arc::new(impl FundamentalsSource))
//!     .with_macro_data(Arc::new(impl MacroDataSource))
//!     .with_advisor(Arc::new(impl NarrativeAdvisor))
//!     .build()
//! ```
//!
//! Every fetch returns an explicit `Result`; the engine turns failures into
//! documented fallback values.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advisory;
pub mod error;
pub mod ids;
pub mod macro_data;
pub mod market_data;
pub mod reference_data;

// Re-export commonly used types
pub use advisory::{
    AdvisoryRequest, HoldingFact, NarrativeAdvisor, PortfolioFacts, RiskTolerance, SymbolFacts,
};
pub use error::TraitError;
pub use ids::Symbol;
pub use macro_data::{MacroData, MacroDataSource};
pub use market_data::{
    DailyClose, MarketData, PriceHistory, PriceHistoryProvider, PriceSnapshot, SourceType,
};
pub use reference_data::{
    AnalystRatings, Fundamentals, FundamentalsSource, GradeChange, RatingSummary, UNKNOWN_SECTOR,
};
