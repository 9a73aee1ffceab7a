//! Fixed macro data source.

use std::path::Path;

use async_trait::async_trait;

use fingenius_traits::{MacroData, MacroDataSource, TraitError};

/// Macro source that always returns the same snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMacroData(MacroData);

impl StaticMacroData {
    /// Create a source returning `data`.
    pub fn new(data: MacroData) -> Self {
        Self(data)
    }

    /// Load the snapshot from a JSON object
    /// `{"interest_rate", "inflation", "gdp_growth"}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let content = std::fs::read_to_string(path)?;
        let data: MacroData = serde_json::from_str(&content)?;
        Ok(Self(data))
    }
}

#[async_trait]
impl MacroDataSource for StaticMacroData {
    async fn fetch(&self) -> Result<MacroData, TraitError> {
        Ok(self.0)
    }
}
