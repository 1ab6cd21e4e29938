//! Validate configuration command.

use anyhow::{bail, Result};
use quotes_config::{to_toml, AppConfig};
use quotes_indicators::{Ema, Macd, Sma};
use std::path::Path;
use tracing::info;

pub async fn run(path: &Path, config: &AppConfig) -> Result<()> {
    info!(path = %path.display(), "Validating configuration");

    if !path.exists() {
        println!("⚠ {} not found, using defaults", path.display());
    }

    let mut errors = Vec::new();

    if let Err(e) = Sma::new(config.indicators.sma_window) {
        errors.push(format!("indicators.sma_window: {}", e));
    }
    if let Err(e) = Ema::new(config.indicators.ema_alpha) {
        errors.push(format!("indicators.ema_alpha: {}", e));
    }
    if let Err(e) = Macd::new(config.indicators.macd) {
        errors.push(format!("indicators.macd: {}", e));
    }
    if config.provider.timeout_secs == 0 {
        errors.push("provider.timeout_secs must be positive".to_string());
    }
    if !matches!(config.logging.format.as_str(), "pretty" | "json") {
        errors.push(format!(
            "logging.format must be \"pretty\" or \"json\", got {:?}",
            config.logging.format
        ));
    }

    if !errors.is_empty() {
        for e in &errors {
            println!("✗ {}", e);
        }
        bail!("{} configuration error(s)", errors.len());
    }

    println!("✓ Configuration valid\n");
    println!("{}", to_toml(config)?);

    Ok(())
}
