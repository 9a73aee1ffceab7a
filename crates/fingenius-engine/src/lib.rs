//! # FinGenius Engine
//!
//! The async analysis engine for FinGenius.
//!
//! This crate provides:
//! - [`AnalysisEngine`]: Orchestrates collaborators and pure analytics
//! - [`AnalysisEngineBuilder`]: Dependency injection of collaborators
//! - [`CachedPriceHistoryProvider`]: TTL cache in front of any price provider
//! - [`EngineConfig`]: TOML-loadable configuration
//!
//! ## Architecture
//!
//! ```text
//! PriceHistoryProvider ──┐
//!                        ├─> fingenius-portfolio analytics ─┬─> PortfolioMetrics
//! FundamentalsSource ────┘                                  │
//!                                                           │
//! MacroDataSource ──────────> NarrativeAdvisor ─────────────┘
//! ```
//!
//! Collaborator failures never fail a request: prices fall back to zero
//! and empty history, sectors to "Unknown", macro data to the default
//! snapshot, and narrative text to the configured unavailable message.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = AnalysisEngineBuilder::new()
//!     .with_config(EngineConfig::from_file("fingenius.toml")?)
//!     .with_prices(Arc::new(price_source))
//!     .with_fundamentals(Arc::new(fundamentals_source))
//!     .with_advisor(Arc::new(advisor))
//!     .with_price_cache(true)
//!     .build()?;
//!
//! let metrics = engine.analyze(&portfolio, RiskTolerance::Moderate, None).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;

// Re-exports
pub use builder::AnalysisEngineBuilder;
pub use cache::{cache_key, CachedPriceHistoryProvider};
pub use config::EngineConfig;
pub use engine::AnalysisEngine;
pub use error::{EngineError, EngineResult};
pub use metrics::{AnalysisRequest, MacroOutlook, PortfolioMetrics, SymbolAnalysis};
