//! CLI definitions.

pub mod commands;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use quotes_core::types::{Interval, Period};
use quotes_indicators::MacdParams;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotes")]
#[command(author, version, about = "Daily OHLC retrieval and technical indicators")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve an OHLC series from the quote provider
    Fetch(FetchArgs),
    /// Compute SMA, EMA and MACD over closing prices
    Indicators(IndicatorArgs),
    /// List files in the data directory
    Files(FilesArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Symbol to fetch
    #[arg(short = 'S', long)]
    pub symbol: String,

    /// Lookback window (e.g. 30d, 6mo, 1y, ytd, max)
    #[arg(short, long, default_value = "1mo")]
    pub period: Period,

    /// Bar interval (daily or coarser)
    #[arg(short, long, default_value = "1d")]
    pub interval: Interval,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
#[command(group(ArgGroup::new("source").required(true).args(["symbol", "csv", "json"])))]
pub struct IndicatorArgs {
    /// Fetch this symbol from the quote provider
    #[arg(short = 'S', long)]
    pub symbol: Option<String>,

    /// Lookback window when fetching
    #[arg(short, long, default_value = "1y")]
    pub period: Period,

    /// Read rows from a CSV file (Date,Open,High,Low,Close,Volume)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Read a saved chart response
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// SMA window (defaults to the configured preset)
    #[arg(long)]
    pub sma: Option<usize>,

    /// EMA smoothing factor in [0, 1]
    #[arg(long)]
    pub ema_alpha: Option<f64>,

    /// MACD periods as SHORT,LONG,SIGNAL
    #[arg(long, value_parser = parse_macd)]
    pub macd: Option<MacdParams>,

    /// Reject CSV rows with unparseable fields instead of substituting zero
    #[arg(long)]
    pub strict: bool,

    /// Number of trailing days to print
    #[arg(long, default_value = "20")]
    pub rows: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct FilesArgs {
    /// Directory to list (defaults to the configured data directory)
    pub dir: Option<PathBuf>,
}

fn parse_macd(s: &str) -> Result<MacdParams, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [short, long, signal] = parts.as_slice() else {
        return Err(format!("expected SHORT,LONG,SIGNAL, got {}", s));
    };
    let period = |p: &str| p.parse::<usize>().map_err(|e| format!("bad period {:?}: {}", p, e));

    Ok(MacdParams {
        short: period(short)?,
        long: period(long)?,
        signal: period(signal)?,
    })
}
