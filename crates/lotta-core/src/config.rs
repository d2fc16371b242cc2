use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub expansion: ExpansionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits applied when expanding recurring events.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Hard cap on occurrences generated from a single rule.
    pub max_occurrences: usize,
    /// Window length in days used when a caller supplies only a start.
    pub default_window_days: u32,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("expansion.max_occurrences", 10_000)?
            .set_default("expansion.default_window_days", 35)?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn load_uses_defaults() {
        let settings = Settings::load().expect("default settings should load");

        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.expansion.max_occurrences, 10_000);
        assert_eq!(settings.expansion.default_window_days, 35);
    }

    #[test]
    fn expansion_config_clone() {
        let config = ExpansionConfig {
            max_occurrences: 500,
            default_window_days: 7,
        };

        let cloned = config.clone();
        assert_eq!(cloned.max_occurrences, config.max_occurrences);
        assert_eq!(cloned.default_window_days, config.default_window_days);
    }
}
