//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use fingenius_portfolio::AnalyticsConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Annual risk-free rate (percent) used unless a request overrides it
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Trading days per year for annualizing volatility
    #[serde(default = "default_trading_days")]
    pub trading_days_per_year: f64,

    /// Trailing window of daily history requested from file sources
    #[serde(default = "default_history_window_days")]
    pub history_window_days: u32,

    /// Lifetime of cached price responses
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Upper bound on any single collaborator call
    #[serde(default = "default_collaborator_timeout_secs")]
    pub collaborator_timeout_secs: u64,

    /// Sector weight (percent) above which a concentration warning is given
    #[serde(default = "default_concentration_threshold")]
    pub concentration_threshold_pct: f64,

    /// Annualized volatility above which a volatility warning is given
    #[serde(default = "default_volatility_threshold")]
    pub volatility_warning_threshold: f64,

    /// Narrative text used when the advisor fails or returns nothing
    #[serde(default = "default_advice_unavailable")]
    pub advice_unavailable_text: String,
}

fn default_risk_free_rate() -> f64 {
    fingenius_portfolio::DEFAULT_RISK_FREE_RATE
}

fn default_trading_days() -> f64 {
    fingenius_portfolio::TRADING_DAYS_PER_YEAR
}

fn default_history_window_days() -> u32 {
    30
}

fn default_cache_ttl_minutes() -> u64 {
    15
}

fn default_collaborator_timeout_secs() -> u64 {
    10
}

fn default_concentration_threshold() -> f64 {
    50.0
}

fn default_volatility_threshold() -> f64 {
    0.3
}

fn default_advice_unavailable() -> String {
    "AI advice unavailable.".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            trading_days_per_year: default_trading_days(),
            history_window_days: default_history_window_days(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            collaborator_timeout_secs: default_collaborator_timeout_secs(),
            concentration_threshold_pct: default_concentration_threshold(),
            volatility_warning_threshold: default_volatility_threshold(),
            advice_unavailable_text: default_advice_unavailable(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing keys take their defaults. The result is validated.
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| EngineError::config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the risk-free rate (percent).
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Set the trailing history window.
    pub fn with_history_window_days(mut self, days: u32) -> Self {
        self.history_window_days = days;
        self
    }

    /// Set the cache TTL in minutes.
    pub fn with_cache_ttl_minutes(mut self, minutes: u64) -> Self {
        self.cache_ttl_minutes = minutes;
        self
    }

    /// Set the collaborator timeout in seconds.
    pub fn with_collaborator_timeout_secs(mut self, secs: u64) -> Self {
        self.collaborator_timeout_secs = secs;
        self
    }

    /// Set the advice-unavailable fallback text.
    pub fn with_advice_unavailable_text(mut self, text: impl Into<String>) -> Self {
        self.advice_unavailable_text = text.into();
        self
    }

    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }

    /// Collaborator timeout as a duration.
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    /// The pure-calculation subset.
    pub fn analytics_config(&self) -> AnalyticsConfig {
        AnalyticsConfig::new()
            .with_risk_free_rate(self.risk_free_rate)
            .with_trading_days(self.trading_days_per_year)
            .with_concentration_threshold(self.concentration_threshold_pct)
            .with_volatility_threshold(self.volatility_warning_threshold)
    }

    /// Check every setting.
    pub fn validate(&self) -> EngineResult<()> {
        self.analytics_config().validate()?;
        if self.history_window_days == 0 {
            return Err(EngineError::config("history_window_days must be at least 1"));
        }
        if self.collaborator_timeout_secs == 0 {
            return Err(EngineError::config(
                "collaborator_timeout_secs must be at least 1",
            ));
        }
        if self.advice_unavailable_text.trim().is_empty() {
            return Err(EngineError::config("advice_unavailable_text must not be blank"));
        }
        Ok(())
    }
}
