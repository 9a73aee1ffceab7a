//! Deterministic recommendations.
//!
//! Two separate ROI tables are used: a five-tier table for individual
//! holdings and a three-tier table for the whole portfolio.

mod advice;
mod tiers;

pub use advice::*;
pub use tiers::*;
