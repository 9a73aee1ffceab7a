//! The analysis engine.
//!
//! Orchestrates one request: fetch market data and fundamentals, run the
//! pure analytics, then ask the narrative advisor. Every collaborator call
//! is bounded by the configured timeout and degrades to a fallback value.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use fingenius_portfolio::{
    bucket_by_sector, calculate_portfolio_analytics, holding_details, holding_recommendation,
    roi_percent, AnalyticsConfig, Holding, Portfolio, PortfolioAnalytics, SectorBreakdown,
};
use fingenius_traits::{
    AdvisoryRequest, Fundamentals, FundamentalsSource, HoldingFact, MacroData, MacroDataSource,
    MarketData, NarrativeAdvisor, PortfolioFacts, PriceHistoryProvider, RiskTolerance, Symbol,
    SymbolFacts, TraitError,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::metrics::{AnalysisRequest, MacroOutlook, PortfolioMetrics, SymbolAnalysis};

/// Portfolio analysis engine.
///
/// Holds no per-request state and can be shared behind an `Arc`.
pub struct AnalysisEngine {
    config: EngineConfig,
    analytics_config: AnalyticsConfig,
    prices: Arc<dyn PriceHistoryProvider>,
    fundamentals: Option<Arc<dyn FundamentalsSource>>,
    macro_data: Option<Arc<dyn MacroDataSource>>,
    advisor: Option<Arc<dyn NarrativeAdvisor>>,
}

impl AnalysisEngine {
    /// Create an engine from its collaborators.
    ///
    /// Prefer [`AnalysisEngineBuilder`](crate::AnalysisEngineBuilder).
    pub fn new(
        config: EngineConfig,
        prices: Arc<dyn PriceHistoryProvider>,
        fundamentals: Option<Arc<dyn FundamentalsSource>>,
        macro_data: Option<Arc<dyn MacroDataSource>>,
        advisor: Option<Arc<dyn NarrativeAdvisor>>,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            analytics_config: config.analytics_config(),
            config,
            prices,
            fundamentals,
            macro_data,
            advisor,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a portfolio with an optional risk-free rate override.
    pub async fn analyze(
        &self,
        portfolio: &Portfolio,
        risk_tolerance: RiskTolerance,
        risk_free_rate: Option<f64>,
    ) -> EngineResult<PortfolioMetrics> {
        let request = AnalysisRequest {
            risk_tolerance,
            risk_free_rate,
            macro_override: None,
        };
        self.analyze_with(portfolio, request).await
    }

    /// Analyze a portfolio with explicit per-request options.
    ///
    /// Returns complete metrics or a single error, never a partial result.
    pub async fn analyze_with(
        &self,
        portfolio: &Portfolio,
        request: AnalysisRequest,
    ) -> EngineResult<PortfolioMetrics> {
        portfolio.validate()?;
        let risk_free_rate = request.risk_free_rate.unwrap_or(self.config.risk_free_rate);
        if !risk_free_rate.is_finite() {
            return Err(EngineError::invalid_input("risk-free rate must be finite"));
        }
        if let Some(m) = &request.macro_override {
            validate_macro(m)?;
        }

        let symbols = portfolio.unique_symbols();
        info!(
            holdings = portfolio.holding_count(),
            symbols = symbols.len(),
            risk_tolerance = %request.risk_tolerance,
            "Analyzing portfolio"
        );

        let market = self.fetch_market(&symbols).await;
        let fundamentals = self.fetch_fundamentals(&symbols).await;

        let analytics = calculate_portfolio_analytics(
            portfolio,
            &market,
            &fundamentals,
            risk_free_rate,
            &self.analytics_config,
        )?;

        let macro_data = match request.macro_override {
            Some(m) => {
                debug!("Using macro override");
                m
            }
            None => self.fetch_macro().await,
        };

        let facts = portfolio_facts(&analytics, request.risk_tolerance, macro_data);
        let narrative_advice = self
            .narrate(AdvisoryRequest::Portfolio(Box::new(facts)))
            .await;

        info!(
            roi_percent = analytics.roi_percent,
            volatility = analytics.volatility,
            sharpe_ratio = analytics.sharpe_ratio,
            "Portfolio analysis complete"
        );

        Ok(PortfolioMetrics {
            analytics,
            narrative_advice,
        })
    }

    /// Sector breakdown only. No macro or advisor calls are made.
    pub async fn breakdown_only(&self, portfolio: &Portfolio) -> EngineResult<SectorBreakdown> {
        portfolio.validate()?;
        let symbols = portfolio.unique_symbols();
        debug!(symbols = symbols.len(), "Computing sector breakdown");

        let market = self.fetch_market(&symbols).await;
        let fundamentals = self.fetch_fundamentals(&symbols).await;
        let details = holding_details(portfolio, &market.snapshot, &fundamentals)?;
        Ok(bucket_by_sector(&details)?)
    }

    /// Analyze a single position.
    pub async fn analyze_symbol(
        &self,
        symbol: &str,
        purchase_price: Decimal,
        quantity: Decimal,
        risk_tolerance: RiskTolerance,
    ) -> EngineResult<SymbolAnalysis> {
        let holding = Holding::new(symbol, quantity, purchase_price)?;
        let symbol = holding.symbol.clone();
        info!(symbol = %symbol, "Analyzing symbol");

        let market = self.fetch_market(std::slice::from_ref(&symbol)).await;
        let current_price = market.snapshot.price(&symbol);
        let invested_amount = holding.invested()?;
        let current_value = holding.value_at(current_price)?;
        let roi = roi_percent(invested_amount, current_value);
        if !roi.is_finite() {
            return Err(EngineError::Calculation(format!("ROI for {symbol} is not finite")));
        }

        let fundamentals = self.fetch_symbol_fundamentals(&symbol).await;
        let local_recommendation = holding_recommendation(&symbol, roi);
        let narrative_recommendation = self
            .narrate(AdvisoryRequest::Symbol(SymbolFacts {
                symbol: symbol.clone(),
                roi_percent: roi,
                fundamentals: fundamentals.clone(),
                risk_tolerance,
            }))
            .await;

        Ok(SymbolAnalysis {
            symbol,
            quantity: holding.quantity,
            invested_amount,
            current_price,
            current_value,
            roi_percent: roi,
            local_recommendation,
            narrative_recommendation,
            fundamentals,
        })
    }

    /// Macro snapshot plus advisor commentary.
    ///
    /// The override, when given, is used for this call only.
    pub async fn macro_outlook(&self, macro_override: Option<MacroData>) -> MacroOutlook {
        let macro_data = match macro_override {
            Some(m) => m,
            None => self.fetch_macro().await,
        };
        let commentary = self.narrate(AdvisoryRequest::MacroOutlook(macro_data)).await;
        MacroOutlook {
            macro_data,
            commentary,
        }
    }

    // =========================================================================
    // COLLABORATOR CALLS
    // =========================================================================

    async fn fetch_market(&self, symbols: &[Symbol]) -> MarketData {
        if symbols.is_empty() {
            return MarketData::empty();
        }
        match bounded(self.timeout(), self.prices.fetch(symbols)).await {
            Ok(market) => {
                debug!(
                    priced = market.snapshot.len(),
                    requested = symbols.len(),
                    "Fetched market data"
                );
                market
            }
            Err(e) => {
                warn!(error = %e, "Price fetch failed, using empty market data");
                MarketData::empty()
            }
        }
    }

    async fn fetch_fundamentals(&self, symbols: &[Symbol]) -> HashMap<Symbol, Fundamentals> {
        let lookups = symbols.iter().map(|s| async move {
            let f = self.fetch_symbol_fundamentals(s).await;
            (s.clone(), f)
        });
        join_all(lookups).await.into_iter().collect()
    }

    async fn fetch_symbol_fundamentals(&self, symbol: &Symbol) -> Fundamentals {
        let Some(source) = &self.fundamentals else {
            return Fundamentals::unknown();
        };
        match bounded(self.timeout(), source.fetch(symbol)).await {
            Ok(f) => f,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Fundamentals fetch failed, sector Unknown");
                Fundamentals::unknown()
            }
        }
    }

    async fn fetch_macro(&self) -> MacroData {
        let Some(source) = &self.macro_data else {
            return MacroData::default();
        };
        match bounded(self.timeout(), source.fetch()).await {
            Ok(m) if validate_macro(&m).is_ok() => m,
            Ok(_) => {
                warn!("Macro source returned non-finite figures, using defaults");
                MacroData::default()
            }
            Err(e) => {
                warn!(error = %e, "Macro fetch failed, using defaults");
                MacroData::default()
            }
        }
    }

    async fn narrate(&self, request: AdvisoryRequest) -> String {
        let Some(advisor) = &self.advisor else {
            return self.config.advice_unavailable_text.clone();
        };
        match bounded(self.timeout(), advisor.summarize(&request)).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Advisor returned blank text");
                self.config.advice_unavailable_text.clone()
            }
            Err(e) => {
                warn!(error = %e, "Advisor failed");
                self.config.advice_unavailable_text.clone()
            }
        }
    }

    fn timeout(&self) -> Duration {
        self.config.collaborator_timeout()
    }
}

/// Await a collaborator call, mapping an elapsed deadline to `Timeout`.
async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, TraitError>
where
    F: Future<Output = Result<T, TraitError>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .unwrap_or(Err(TraitError::Timeout))
}

fn validate_macro(m: &MacroData) -> EngineResult<()> {
    if [m.interest_rate, m.inflation, m.gdp_growth]
        .iter()
        .all(|v| v.is_finite())
    {
        Ok(())
    } else {
        Err(EngineError::invalid_input("macro figures must be finite"))
    }
}

fn portfolio_facts(
    analytics: &PortfolioAnalytics,
    risk_tolerance: RiskTolerance,
    macro_data: MacroData,
) -> PortfolioFacts {
    PortfolioFacts {
        total_investment: analytics.total_investment,
        current_value: analytics.current_value,
        roi_percent: analytics.roi_percent,
        volatility: analytics.volatility,
        sharpe_ratio: analytics.sharpe_ratio,
        sector_breakdown: analytics.sector_breakdown.clone().into_inner(),
        holdings: analytics
            .holdings
            .iter()
            .map(|h| HoldingFact {
                symbol: h.symbol.clone(),
                current_value: h.current_value,
                roi_percent: h.roi_percent,
                sector: h.sector.clone(),
            })
            .collect(),
        risk_tolerance,
        macro_data,
    }
}
