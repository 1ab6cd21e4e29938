//! Indicators command implementation.

use crate::cli::{IndicatorArgs, OutputFormat};
use anyhow::{bail, Context, Result};
use quotes_config::AppConfig;
use quotes_core::types::OhlcSeries;
use quotes_data::{fetch_daily, load_chart_json, load_csv, ParsePolicy, YahooFinance};
use quotes_monitor::IndicatorReport;
use tracing::info;

pub async fn run(args: IndicatorArgs, config: &AppConfig) -> Result<()> {
    let series = load_series(&args, config).await?;
    if series.is_empty() {
        bail!("No usable records for {}", series.symbol);
    }

    let presets = &config.indicators;
    let sma_window = args.sma.unwrap_or(presets.sma_window);
    let ema_alpha = args.ema_alpha.unwrap_or(presets.ema_alpha);
    let macd_params = args.macd.unwrap_or(presets.macd);

    info!(
        symbol = %series.symbol,
        records = series.len(),
        sma_window,
        ema_alpha,
        "Computing indicators"
    );

    let report = IndicatorReport::build(&series, sma_window, ema_alpha, macd_params)
        .with_context(|| format!("Indicator computation failed for {}", series.symbol))?;

    match args.output {
        OutputFormat::Text => println!("{}", report.summary(args.rows)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

async fn load_series(args: &IndicatorArgs, config: &AppConfig) -> Result<OhlcSeries> {
    if let Some(path) = &args.csv {
        let policy = if args.strict {
            ParsePolicy::Strict
        } else {
            config.data.parse_policy
        };
        return load_csv(path, policy).with_context(|| format!("Failed to load {}", path.display()));
    }

    if let Some(path) = &args.json {
        return load_chart_json(path).with_context(|| format!("Failed to load {}", path.display()));
    }

    let Some(symbol) = &args.symbol else {
        bail!("One of --symbol, --csv or --json is required");
    };
    let source = YahooFinance::new(config.provider.yahoo_config())
        .context("Failed to build quote provider client")?;

    fetch_daily(&source, symbol, args.period)
        .await
        .with_context(|| format!("Failed to fetch {}", symbol))
}
