//! Request and result types exposed by the engine.

use fingenius_portfolio::PortfolioAnalytics;
use fingenius_traits::{Fundamentals, MacroData, RiskTolerance, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-request options for a portfolio analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Investor risk appetite forwarded to the advisor
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,

    /// Risk-free rate (percent) overriding the configured one
    pub risk_free_rate: Option<f64>,

    /// Macro snapshot used instead of the injected macro source
    pub macro_override: Option<MacroData>,
}

impl AnalysisRequest {
    /// Request with the given risk tolerance and no overrides.
    pub fn new(risk_tolerance: RiskTolerance) -> Self {
        Self {
            risk_tolerance,
            ..Self::default()
        }
    }

    /// Override the risk-free rate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }

    /// Override the macro snapshot for this request.
    pub fn with_macro_override(mut self, macro_data: MacroData) -> Self {
        self.macro_override = Some(macro_data);
        self
    }
}

/// Full portfolio analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Deterministic metrics, holdings, breakdown and local advice
    #[serde(flatten)]
    pub analytics: PortfolioAnalytics,

    /// Advisor commentary, or the unavailable text
    pub narrative_advice: String,
}

/// Single-symbol analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolAnalysis {
    /// Symbol
    pub symbol: Symbol,
    /// Units held
    pub quantity: Decimal,
    /// purchase_price × quantity
    pub invested_amount: Decimal,
    /// Latest price (zero when unavailable)
    pub current_price: Decimal,
    /// current_price × quantity
    pub current_value: Decimal,
    /// ROI in percent
    pub roi_percent: f64,
    /// Deterministic recommendation
    pub local_recommendation: String,
    /// Advisor recommendation, or the unavailable text
    pub narrative_recommendation: String,
    /// Sector, valuation multiple and analyst ratings
    pub fundamentals: Fundamentals,
}

/// Macro snapshot with advisor commentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroOutlook {
    /// Macro figures used
    pub macro_data: MacroData,
    /// Advisor commentary, or the unavailable text
    pub commentary: String,
}
