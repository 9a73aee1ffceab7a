//! Narrative advisor traits.
//!
//! A [`NarrativeAdvisor`] turns already-computed facts into free text. It is
//! non-deterministic and may fail; callers substitute a fallback string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::Symbol;
use crate::macro_data::MacroData;
use crate::reference_data::Fundamentals;

/// Investor risk appetite, forwarded to the advisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    /// Capital preservation first
    Conservative,
    /// Balanced growth and risk
    #[default]
    Moderate,
    /// Growth first, accepts drawdowns
    Aggressive,
}

impl RiskTolerance {
    /// Lower-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTolerance {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(TraitError::InvalidInput(format!(
                "unknown risk tolerance '{other}' (expected conservative, moderate or aggressive)"
            ))),
        }
    }
}

/// Per-holding facts handed to the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingFact {
    /// Symbol
    pub symbol: Symbol,
    /// Current market value
    pub current_value: Decimal,
    /// Holding ROI (percent)
    pub roi_percent: f64,
    /// Sector label
    pub sector: String,
}

/// Portfolio-level facts handed to the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioFacts {
    /// Total invested capital
    pub total_investment: Decimal,
    /// Current market value
    pub current_value: Decimal,
    /// Portfolio ROI (percent)
    pub roi_percent: f64,
    /// Annualized volatility (decimal fraction)
    pub volatility: f64,
    /// Sharpe-style ratio
    pub sharpe_ratio: f64,
    /// Sector allocation (percent)
    pub sector_breakdown: BTreeMap<String, f64>,
    /// Holdings
    pub holdings: Vec<HoldingFact>,
    /// Investor risk appetite
    pub risk_tolerance: RiskTolerance,
    /// Macro backdrop
    pub macro_data: MacroData,
}

/// Single-symbol facts handed to the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFacts {
    /// Symbol
    pub symbol: Symbol,
    /// Holding ROI (percent)
    pub roi_percent: f64,
    /// Fundamentals
    pub fundamentals: Fundamentals,
    /// Investor risk appetite
    pub risk_tolerance: RiskTolerance,
}

/// What the advisor is asked to comment on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "facts", rename_all = "snake_case")]
pub enum AdvisoryRequest {
    /// Whole-portfolio commentary
    Portfolio(Box<PortfolioFacts>),
    /// Single-symbol commentary
    Symbol(SymbolFacts),
    /// Macro outlook commentary
    MacroOutlook(MacroData),
}

/// Trait for narrative advisors (LLM-backed or otherwise).
#[async_trait]
pub trait NarrativeAdvisor: Send + Sync {
    /// Produce commentary for the request.
    async fn summarize(&self, request: &AdvisoryRequest) -> Result<String, TraitError>;
}
