//! Symbol command implementation.
//!
//! Analyzes one position without a portfolio file.

use anyhow::Result;
use clap::Args;

use fingenius_engine::SymbolAnalysis;
use fingenius_traits::RiskTolerance;

use crate::cli::OutputFormat;
use crate::commands::{build_engine, parse_decimal, Context, SourceArgs};
use crate::output::{format_money, format_roi, print_header, print_json, print_paragraph, print_table, KeyValue};

/// Arguments for the symbol command.
#[derive(Args, Debug)]
pub struct SymbolArgs {
    /// Ticker symbol (case-insensitive)
    pub symbol: String,

    /// Cost basis per unit
    #[arg(long)]
    pub purchase_price: String,

    /// Units held
    #[arg(short, long)]
    pub quantity: String,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Risk tolerance forwarded to the advisor
    #[arg(long, default_value = "moderate")]
    pub risk_tolerance: RiskTolerance,
}

/// Execute the symbol command.
pub async fn execute(args: SymbolArgs, ctx: &Context) -> Result<()> {
    let purchase_price = parse_decimal("purchase price", &args.purchase_price)?;
    let quantity = parse_decimal("quantity", &args.quantity)?;
    let engine = build_engine(ctx, &args.sources)?;

    let analysis = engine
        .analyze_symbol(&args.symbol, purchase_price, quantity, args.risk_tolerance)
        .await?;

    match ctx.format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Table => print_analysis(&analysis),
    }

    Ok(())
}

fn print_analysis(analysis: &SymbolAnalysis) {
    print_header(&format!("{} Position", analysis.symbol));

    let mut rows = vec![
        KeyValue::new("Quantity", analysis.quantity.normalize().to_string()),
        KeyValue::new("Invested", format_money(analysis.invested_amount)),
        KeyValue::new("Current Price", format_money(analysis.current_price)),
        KeyValue::new("Current Value", format_money(analysis.current_value)),
        KeyValue::new("ROI", format_roi(analysis.roi_percent)),
        KeyValue::new("Sector", analysis.fundamentals.sector.clone()),
    ];
    if let Some(pe) = analysis.fundamentals.valuation_multiple {
        rows.push(KeyValue::new("P/E", format!("{pe:.2}")));
    }
    if let Some(consensus) = analysis.fundamentals.analyst_ratings.consensus() {
        rows.push(KeyValue::new("Analyst Consensus", consensus));
    }
    print_table(&rows);

    print_paragraph("Recommendation", &analysis.local_recommendation);
    print_paragraph("Narrative", &analysis.narrative_recommendation);
}
