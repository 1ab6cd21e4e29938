//! Fetch command implementation.

use crate::cli::{FetchArgs, OutputFormat};
use anyhow::{Context, Result};
use quotes_config::AppConfig;
use quotes_core::traits::{QuoteRequest, QuoteSource};
use quotes_data::{normalize_chart, YahooFinance};
use tracing::info;

pub async fn run(args: FetchArgs, config: &AppConfig) -> Result<()> {
    info!(
        symbol = %args.symbol,
        period = %args.period,
        interval = %args.interval,
        "Fetching quotes"
    );

    let source = YahooFinance::new(config.provider.yahoo_config())
        .context("Failed to build quote provider client")?;

    let request = QuoteRequest::daily(&args.symbol, args.period).with_interval(args.interval);
    let response = source
        .fetch(&request)
        .await
        .with_context(|| format!("Failed to fetch {}", args.symbol))?;
    let series = normalize_chart(&response)
        .with_context(|| format!("Failed to normalize response for {}", args.symbol))?;

    info!(symbol = %series.symbol, records = series.len(), "Fetch complete");

    match args.output {
        OutputFormat::Text => print!("{}", series),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
    }

    Ok(())
}
