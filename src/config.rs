//! TOML-based settings: default tariff and server bind address.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

pub use crate::error::ConfigError;
use crate::projection::EnergyRate;

/// Top-level settings parsed from TOML.
///
/// All fields have defaults, so an empty file is valid. Load with
/// [`Settings::from_toml_file`] or use [`Settings::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Tariff applied when a submission does not carry its own rate.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// HTTP listener parameters.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Tariff parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Rate per kWh (integer, 3–10).
    pub rate_per_kwh: EnergyRate,
    /// Currency symbol prefixed to costs.
    pub currency: String,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            rate_per_kwh: EnergyRate::default(),
            currency: "₹".to_string(),
        }
    }
}

/// HTTP listener parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address, e.g. `"127.0.0.1:3000"`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("settings", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid, contains unknown
    /// fields, or holds a rate outside 3–10.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the settings are valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.tariff.currency.trim().is_empty() {
            errors.push(ConfigError::new("tariff.currency", "must not be empty"));
        }
        if self.server.bind.parse::<SocketAddr>().is_err() {
            errors.push(ConfigError::new(
                "server.bind",
                format!("\"{}\" is not a socket address", self.server.bind),
            ));
        }

        errors
    }

    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::new("server.bind", format!("\"{}\": {e}", self.server.bind))
        })
    }
}
