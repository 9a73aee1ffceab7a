//! Builder pattern for the analysis engine.

use std::sync::Arc;

use fingenius_traits::{FundamentalsSource, MacroDataSource, NarrativeAdvisor, PriceHistoryProvider};

use crate::cache::CachedPriceHistoryProvider;
use crate::config::EngineConfig;
use crate::engine::AnalysisEngine;
use crate::error::EngineError;

/// Builder for constructing an [`AnalysisEngine`].
///
/// Only the price provider is required. Without a fundamentals source every
/// sector is "Unknown", without a macro source the default snapshot is used,
/// and without an advisor the narrative is the unavailable text.
pub struct AnalysisEngineBuilder {
    config: Option<EngineConfig>,
    prices: Option<Arc<dyn PriceHistoryProvider>>,
    fundamentals: Option<Arc<dyn FundamentalsSource>>,
    macro_data: Option<Arc<dyn MacroDataSource>>,
    advisor: Option<Arc<dyn NarrativeAdvisor>>,
    cache_prices: bool,
}

impl AnalysisEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            prices: None,
            fundamentals: None,
            macro_data: None,
            advisor: None,
            cache_prices: false,
        }
    }

    /// Set the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the price history provider.
    pub fn with_prices(mut self, provider: Arc<dyn PriceHistoryProvider>) -> Self {
        self.prices = Some(provider);
        self
    }

    /// Set the fundamentals source.
    pub fn with_fundamentals(mut self, source: Arc<dyn FundamentalsSource>) -> Self {
        self.fundamentals = Some(source);
        self
    }

    /// Set the macro data source.
    pub fn with_macro_data(mut self, source: Arc<dyn MacroDataSource>) -> Self {
        self.macro_data = Some(source);
        self
    }

    /// Set the narrative advisor.
    pub fn with_advisor(mut self, advisor: Arc<dyn NarrativeAdvisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Put a TTL cache (`cache_ttl_minutes`) in front of the price provider.
    pub fn with_price_cache(mut self, enabled: bool) -> Self {
        self.cache_prices = enabled;
        self
    }

    /// Build the analysis engine.
    pub fn build(self) -> Result<AnalysisEngine, EngineError> {
        let config = self.config.unwrap_or_default();

        let prices = self
            .prices
            .ok_or_else(|| EngineError::config("price provider not configured"))?;

        let prices: Arc<dyn PriceHistoryProvider> = if self.cache_prices {
            Arc::new(CachedPriceHistoryProvider::new(prices, config.cache_ttl()))
        } else {
            prices
        };

        AnalysisEngine::new(config, prices, self.fundamentals, self.macro_data, self.advisor)
    }
}

impl Default for AnalysisEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
