//! Configuration structures.

use quotes_data::{ParsePolicy, YahooConfig, DEFAULT_BASE_URL};
use quotes_indicators::MacdParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quotes".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Also write logs to this file when set.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Quote provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        let yahoo = YahooConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: yahoo.timeout.as_secs(),
            user_agent: yahoo.user_agent,
        }
    }
}

impl ProviderSettings {
    /// Client settings for the Yahoo source.
    pub fn yahoo_config(&self) -> YahooConfig {
        YahooConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Local data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory listed by `files` when no path is given
    pub dir: PathBuf,
    /// How unparseable CSV fields are handled
    pub parse_policy: ParsePolicy,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            parse_policy: ParsePolicy::Lenient,
        }
    }
}

/// Indicator presets handed to the engine by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma_window: usize,
    pub ema_alpha: f64,
    pub macd: MacdParams,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_alpha: 0.1,
            macd: MacdParams::default(),
        }
    }
}
