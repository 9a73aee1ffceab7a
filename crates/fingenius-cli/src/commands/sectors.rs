//! Sectors command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fingenius_portfolio::SectorBreakdown;

use crate::cli::OutputFormat;
use crate::commands::{build_engine, load_portfolio, Context, SourceArgs};
use crate::output::{print_header, print_json, print_table, KeyValue};

/// Arguments for the sectors command.
#[derive(Args, Debug)]
pub struct SectorsArgs {
    /// Portfolio JSON (holdings with symbol, quantity, purchase_price)
    #[arg(short, long)]
    pub portfolio: PathBuf,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Execute the sectors command.
pub async fn execute(args: SectorsArgs, ctx: &Context) -> Result<()> {
    let portfolio = load_portfolio(&args.portfolio)?;
    let engine = build_engine(ctx, &args.sources)?;

    let breakdown = engine.breakdown_only(&portfolio).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&breakdown)?,
        OutputFormat::Table => print_breakdown(&breakdown),
    }

    Ok(())
}

/// Sector weights, heaviest first.
pub fn print_breakdown(breakdown: &SectorBreakdown) {
    print_header("Sector Breakdown");
    let rows: Vec<KeyValue> = breakdown
        .sorted_by_weight()
        .into_iter()
        .map(|(sector, pct)| KeyValue::new(sector, format!("{pct:.2}%")))
        .collect();
    print_table(&rows);
}
