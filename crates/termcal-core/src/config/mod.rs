use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PRODID, DEFAULT_TIMEZONE};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "termcal.toml";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "TERMCAL";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA zone used when the schedule document does not name one.
    pub timezone: String,
    pub prodid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, an optional TOML file and `TERMCAL_*`
    /// environment variables. Environment variables take precedence.
    ///
    /// When `file` is `None`, `termcal.toml` in the working directory is used
    /// if present. An explicitly named file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        Ok(Config::builder()
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from a `.env` file, environment variables and an
/// optional configuration file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load(file)
}
