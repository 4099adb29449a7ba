//! Configuration loading — TOML embedded into the module at build time.
//!
//! A page has no filesystem and no environment, so `themeswitch.toml` is
//! compiled in. Every field has a sensible default so any section may be
//! omitted.

use serde::Deserialize;
use themeswitch_app::config::{InvalidThemeConfig, ThemeConfig};

/// The configuration shipped with the module.
const EMBEDDED: &str = include_str!("../themeswitch.toml");

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Names the theme controller reads and writes.
    pub theme: ThemeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document is malformed.
    #[error("failed to parse config")]
    Parse(#[source] toml::de::Error),
    /// A value is well-formed but unusable.
    #[error("invalid config")]
    Validation(#[from] InvalidThemeConfig),
}

impl Config {
    /// Load the embedded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML is malformed or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for unusable values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.theme.validate()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "themeswitch=info".to_string(),
        }
    }
}
