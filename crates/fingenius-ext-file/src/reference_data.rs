//! File-based fundamentals sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use fingenius_traits::{AnalystRatings, Fundamentals, FundamentalsSource, Symbol, TraitError};

// =============================================================================
// JSON FUNDAMENTALS SOURCE
// =============================================================================

/// JSON record for one symbol.
#[derive(Debug, Deserialize)]
struct FundamentalsRecord {
    symbol: String,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default, alias = "trailingPE")]
    pe_ratio: Option<f64>,
    #[serde(default)]
    recommendations: Value,
}

/// JSON-based fundamentals source.
///
/// The file holds an array of
/// `{"symbol", "sector", "pe_ratio"?, "recommendations"?}` objects.
/// `recommendations` may be either analyst-ratings shape (trend summary or
/// upgrade/downgrade list); other shapes are kept as unrecognized.
pub struct JsonFundamentalsSource {
    file_path: PathBuf,
    entries: DashMap<Symbol, Fundamentals>,
}

impl JsonFundamentalsSource {
    /// Create a new JSON fundamentals source.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            entries: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload fundamentals from file.
    pub fn reload(&self) -> Result<(), TraitError> {
        self.entries.clear();
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let records: Vec<FundamentalsRecord> = serde_json::from_str(&content)?;

        for record in records {
            let symbol = Symbol::parse(&record.symbol)?;
            let mut fundamentals = Fundamentals::new(record.sector.unwrap_or_default())
                .with_analyst_ratings(AnalystRatings::from_json(&record.recommendations));
            if let Some(pe) = record.pe_ratio {
                fundamentals = fundamentals.with_valuation_multiple(pe);
            }
            self.entries.insert(symbol, fundamentals);
        }

        info!(
            path = %self.file_path.display(),
            symbols = self.entries.len(),
            "Loaded fundamentals"
        );
        Ok(())
    }
}

#[async_trait]
impl FundamentalsSource for JsonFundamentalsSource {
    async fn fetch(&self, symbol: &Symbol) -> Result<Fundamentals, TraitError> {
        self.entries
            .get(symbol)
            .map(|f| f.value().clone())
            .ok_or_else(|| TraitError::NotFound(format!("fundamentals for {symbol}")))
    }
}

// =============================================================================
// EMPTY SOURCE
// =============================================================================

/// Fundamentals source that knows nothing; every symbol is "Unknown".
pub struct EmptyFundamentalsSource;

#[async_trait]
impl FundamentalsSource for EmptyFundamentalsSource {
    async fn fetch(&self, _symbol: &Symbol) -> Result<Fundamentals, TraitError> {
        Ok(Fundamentals::unknown())
    }
}
