//! FinGenius CLI - Command-line interface for portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Full analysis of a portfolio against a CSV of daily closes
//! fingenius analyze --portfolio portfolio.json --prices closes.csv
//!
//! # Sector breakdown only
//! fingenius sectors --portfolio portfolio.json --prices closes.csv --fundamentals fundamentals.json
//!
//! # Single position
//! fingenius symbol AAPL --purchase-price 150 --quantity 10 --prices closes.csv
//!
//! # Macro outlook
//! fingenius outlook --macro-data macro.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let ctx = commands::Context::load(cli.format, cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx).await?,
        Commands::Sectors(args) => commands::sectors::execute(args, &ctx).await?,
        Commands::Symbol(args) => commands::symbol::execute(args, &ctx).await?,
        Commands::Outlook(args) => commands::outlook::execute(args, &ctx).await?,
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info,fingenius=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
