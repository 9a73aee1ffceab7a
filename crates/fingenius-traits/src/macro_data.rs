//! Macro-economic data source traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// Headline macro figures, all in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroData {
    /// Policy interest rate (percent)
    pub interest_rate: f64,
    /// Year-over-year inflation (percent)
    pub inflation: f64,
    /// Real GDP growth (percent)
    pub gdp_growth: f64,
}

impl MacroData {
    /// Create a macro data snapshot.
    pub fn new(interest_rate: f64, inflation: f64, gdp_growth: f64) -> Self {
        Self {
            interest_rate,
            inflation,
            gdp_growth,
        }
    }
}

impl Default for MacroData {
    fn default() -> Self {
        Self::new(5.0, 3.0, 2.1)
    }
}

/// Trait for macro data providers.
#[async_trait]
pub trait MacroDataSource: Send + Sync {
    /// Fetch the current macro snapshot.
    async fn fetch(&self) -> Result<MacroData, TraitError>;
}
