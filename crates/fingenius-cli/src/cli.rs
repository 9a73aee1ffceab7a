//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, OutlookArgs, SectorsArgs, SymbolArgs};

/// FinGenius - Portfolio risk and return analytics CLI
#[derive(Parser)]
#[command(name = "fingenius")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "FINGENIUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Full portfolio analysis (ROI, volatility, Sharpe, sectors, advice)
    Analyze(AnalyzeArgs),

    /// Sector breakdown of a portfolio
    Sectors(SectorsArgs),

    /// Analyze a single position
    Symbol(SymbolArgs),

    /// Macro snapshot with commentary
    Outlook(OutlookArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
