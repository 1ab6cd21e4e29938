//! Quotes CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use quotes_config::load_config;
use quotes_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Setup logging; the CLI flags win over the configuration file
    let log_level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json_logs = cli.json_logs || config.logging.format.eq_ignore_ascii_case("json");
    let _log_guard = setup_logging(&log_level, json_logs, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Fetch(args) => cli::commands::fetch::run(args, &config).await,
        Commands::Indicators(args) => cli::commands::indicators::run(args, &config).await,
        Commands::Files(args) => cli::commands::files::run(args, &config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config).await,
    }
}
