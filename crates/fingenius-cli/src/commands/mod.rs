//! CLI command implementations.

pub mod analyze;
pub mod outlook;
pub mod sectors;
pub mod symbol;

pub use analyze::AnalyzeArgs;
pub use outlook::OutlookArgs;
pub use sectors::SectorsArgs;
pub use symbol::SymbolArgs;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use clap::Args;
use rust_decimal::Decimal;
use tracing::debug;

use fingenius_engine::{AnalysisEngine, AnalysisEngineBuilder, EngineConfig};
use fingenius_ext_file::{create_file_fundamentals, create_file_prices, StaticAdvisor, StaticMacroData};
use fingenius_portfolio::{Holding, Portfolio};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// State shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Engine configuration (file or defaults).
    pub config: EngineConfig,
}

impl Context {
    /// Loads the engine configuration, falling back to defaults.
    pub fn load(format: OutputFormat, config_path: Option<&Path>) -> CliResult<Self> {
        let config = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration");
                EngineConfig::from_file(path).map_err(|e| CliError::Config(e.to_string()))?
            }
            None => EngineConfig::default(),
        };
        Ok(Self { format, config })
    }
}

/// Data files shared by the portfolio and symbol commands.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Daily closes CSV (`date,symbol,close`)
    #[arg(long)]
    pub prices: PathBuf,

    /// Fundamentals JSON (sector, pe_ratio, recommendations per symbol)
    #[arg(long)]
    pub fundamentals: Option<PathBuf>,

    /// Macro snapshot JSON (interest_rate, inflation, gdp_growth)
    #[arg(long = "macro-data")]
    pub macro_data: Option<PathBuf>,
}

/// Builds an engine over file sources with the offline advisor.
pub fn build_engine(ctx: &Context, sources: &SourceArgs) -> anyhow::Result<AnalysisEngine> {
    if !sources.prices.is_file() {
        return Err(CliError::Source(format!("{} not found", sources.prices.display())).into());
    }
    let prices = create_file_prices(&sources.prices, ctx.config.history_window_days)
        .map_err(|e| CliError::Source(format!("{}: {e}", sources.prices.display())))?;
    let fundamentals = create_file_fundamentals(sources.fundamentals.as_deref())
        .map_err(|e| CliError::Source(e.to_string()))?;

    let mut builder = AnalysisEngineBuilder::new()
        .with_config(ctx.config.clone())
        .with_prices(prices)
        .with_fundamentals(fundamentals)
        .with_advisor(Arc::new(StaticAdvisor::default()));

    if let Some(path) = &sources.macro_data {
        let macro_source = StaticMacroData::from_json_file(path)
            .map_err(|e| CliError::Source(format!("{}: {e}", path.display())))?;
        builder = builder.with_macro_data(Arc::new(macro_source));
    }

    Ok(builder.build()?)
}

/// Reads a portfolio file.
///
/// Accepts `{"holdings": [...]}` or a bare array of holdings.
pub fn load_portfolio(path: &Path) -> CliResult<Portfolio> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |e: serde_json::Error| CliError::InvalidPortfolio {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if content.trim_start().starts_with('[') {
        let holdings: Vec<Holding> = serde_json::from_str(&content).map_err(invalid)?;
        Ok(Portfolio::new(holdings))
    } else {
        serde_json::from_str(&content).map_err(invalid)
    }
}

/// Parses a decimal argument.
pub fn parse_decimal(name: &'static str, value: &str) -> CliResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
