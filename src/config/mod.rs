//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `PASSCRAFT__<SECTION>__<KEY>` pattern

mod defaults;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::GeneratorConfig;

pub use defaults::{MemorableDefaults, PinDefaults, RandomDefaults};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Random password defaults.
    #[serde(default)]
    pub random: RandomDefaults,

    /// Memorable password defaults.
    #[serde(default)]
    pub memorable: MemorableDefaults,

    /// PIN defaults.
    #[serde(default)]
    pub pin: PinDefaults,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{PASSCRAFT_PROFILE}.toml` (if `PASSCRAFT_PROFILE` is set)
    /// 3. Environment variables with `PASSCRAFT__` prefix, including those from `.env`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let profile = std::env::var("PASSCRAFT_PROFILE").unwrap_or_else(|_| "default".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            .add_source(environment())
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random.length == 0 {
            return Err(ConfigError::Message(
                "random.length cannot be 0".to_string(),
            ));
        }
        if self.memorable.word_count == 0 {
            return Err(ConfigError::Message(
                "memorable.word_count cannot be 0".to_string(),
            ));
        }
        self.pin
            .to_config()
            .validate()
            .map_err(|e| ConfigError::Message(format!("pin: {e}")))?;

        Ok(())
    }
}

/// Environment source.
///
/// `PASSCRAFT__RANDOM__LENGTH=20` sets `random.length`, and
/// `PASSCRAFT__PIN__BLOCKED=1234,9999` sets the PIN blocklist. A lone code
/// parses as a number, so a one-entry blocklist belongs in a config file.
fn environment() -> Environment {
    Environment::with_prefix("PASSCRAFT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("pin.blocked")
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.random.length, 12);
        assert_eq!(config.memorable.word_count, 4);
        assert_eq!(config.pin.length, 4);
        assert_eq!(config.observability.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.pin.length = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pin.blocked.insert("12-4".to_string());
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.memorable.word_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let vars = config::Map::from([
            ("PASSCRAFT__PIN__BLOCKED".to_string(), "1234,9999".to_string()),
            ("PASSCRAFT__RANDOM__LENGTH".to_string(), "20".to_string()),
            ("PASSCRAFT__MEMORABLE__SEPARATOR".to_string(), ".".to_string()),
        ]);
        let config: AppConfig = Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.random.length, 20);
        assert_eq!(config.memorable.separator, ".");
        assert_eq!(
            config.pin.blocked.iter().map(String::as_str).collect::<Vec<_>>(),
            ["1234", "9999"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                "[random]\nlength = 20\nsymbols = true\n\n[pin]\nlength = 6\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.random.length, 20);
        assert!(config.random.symbols);
        assert!(config.random.upper);
        assert_eq!(config.pin.length, 6);
        assert!(config.pin.blocked.contains("1234"));
        assert_eq!(config.memorable.separator, "-");
    }
}
