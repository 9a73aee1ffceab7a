//! Analyze command implementation.
//!
//! Full portfolio analysis: valuation, volatility, Sharpe ratio, sector
//! breakdown, local advice and narrative advice.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use fingenius_engine::{AnalysisRequest, PortfolioMetrics};
use fingenius_traits::RiskTolerance;

use crate::cli::OutputFormat;
use crate::commands::{build_engine, load_portfolio, Context, SourceArgs};
use crate::output::{format_money, format_roi, print_header, print_json, print_paragraph, print_table, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Portfolio JSON (holdings with symbol, quantity, purchase_price)
    #[arg(short, long)]
    pub portfolio: PathBuf,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Risk tolerance forwarded to the advisor
    #[arg(long, default_value = "moderate")]
    pub risk_tolerance: RiskTolerance,

    /// Annual risk-free rate in percent (overrides the configuration)
    #[arg(long)]
    pub risk_free_rate: Option<f64>,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let portfolio = load_portfolio(&args.portfolio)?;
    let engine = build_engine(ctx, &args.sources)?;

    let mut request = AnalysisRequest::new(args.risk_tolerance);
    if let Some(rate) = args.risk_free_rate {
        request = request.with_risk_free_rate(rate);
    }

    let metrics = engine.analyze_with(&portfolio, request).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&metrics)?,
        OutputFormat::Table => print_metrics(&metrics),
    }

    Ok(())
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "P/E")]
    pe: String,
}

fn print_metrics(metrics: &PortfolioMetrics) {
    let analytics = &metrics.analytics;

    print_header("Portfolio Summary");
    let summary = vec![
        KeyValue::new("Total Investment", format_money(analytics.total_investment)),
        KeyValue::new("Current Value", format_money(analytics.current_value)),
        KeyValue::new("Profit / Loss", format_money(analytics.profit_loss())),
        KeyValue::new("ROI", format_roi(analytics.roi_percent)),
        KeyValue::new("Volatility", format!("{:.4}", analytics.volatility)),
        KeyValue::new("Sharpe Ratio", format!("{:.4}", analytics.sharpe_ratio)),
    ];
    print_table(&summary);

    print_header("Holdings");
    let rows: Vec<HoldingRow> = analytics
        .holdings
        .iter()
        .map(|h| HoldingRow {
            symbol: h.symbol.to_string(),
            quantity: h.quantity.normalize().to_string(),
            invested: format_money(h.invested_amount),
            value: format_money(h.current_value),
            roi: format_roi(h.roi_percent),
            sector: h.sector.clone(),
            pe: h
                .valuation_multiple
                .map(|m| format!("{m:.2}"))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    print_table(&rows);

    super::sectors::print_breakdown(&analytics.sector_breakdown);

    print_paragraph("Local Advice", &analytics.local_advice);
    print_paragraph("Narrative Advice", &metrics.narrative_advice);
}
