//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, DataSettings, IndicatorSettings, LoggingConfig, ProviderSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from an optional file and the environment.
///
/// A missing file is not an error: every section has defaults, and
/// `QUOTES__SECTION__KEY` variables override both.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("QUOTES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Render a configuration as TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}
