//! Outlook command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use fingenius_engine::{AnalysisEngineBuilder, MacroOutlook};
use fingenius_ext_file::{EmptyPriceHistorySource, StaticAdvisor, StaticMacroData};
use fingenius_traits::MacroData;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_paragraph, print_table, KeyValue};

/// Arguments for the outlook command.
#[derive(Args, Debug)]
pub struct OutlookArgs {
    /// Macro snapshot JSON (interest_rate, inflation, gdp_growth)
    #[arg(long = "macro-data")]
    pub macro_data: Option<PathBuf>,
}

/// Execute the outlook command.
pub async fn execute(args: OutlookArgs, ctx: &Context) -> Result<()> {
    let source = match &args.macro_data {
        Some(path) => StaticMacroData::from_json_file(path)
            .map_err(|e| CliError::Source(format!("{}: {e}", path.display())))?,
        None => StaticMacroData::default(),
    };

    let engine = AnalysisEngineBuilder::new()
        .with_config(ctx.config.clone())
        .with_prices(Arc::new(EmptyPriceHistorySource))
        .with_macro_data(Arc::new(source))
        .with_advisor(Arc::new(StaticAdvisor::default()))
        .build()?;

    let outlook = engine.macro_outlook(None).await;

    match ctx.format {
        OutputFormat::Json => print_json(&outlook)?,
        OutputFormat::Table => print_outlook(&outlook),
    }

    Ok(())
}

fn print_outlook(outlook: &MacroOutlook) {
    let MacroData {
        interest_rate,
        inflation,
        gdp_growth,
    } = outlook.macro_data;

    print_header("Macro Snapshot");
    print_table(&[
        KeyValue::new("Interest Rate", format!("{interest_rate:.2}%")),
        KeyValue::new("Inflation", format!("{inflation:.2}%")),
        KeyValue::new("GDP Growth", format!("{gdp_growth:.2}%")),
    ]);
    print_paragraph("Commentary", &outlook.commentary);
}
