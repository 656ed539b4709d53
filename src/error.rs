//! Error types shared by the collector, the settings layer, and the front ends.

use thiserror::Error;

/// A submission is missing a required field or left a selection unset.
///
/// Carries no field information; the form shows one generic message and no
/// partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required fields")]
pub struct ValidationError;

/// A raw value could not be turned into one of the bounded input types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Housing type outside `Flat` / `Tenament`.
    #[error("unknown housing type \"{0}\" (expected Flat or Tenament)")]
    UnknownHousingType(String),
    /// Home configuration outside `1BHK` / `2BHK` / `3BHK`.
    #[error("unknown home configuration \"{0}\" (expected 1BHK, 2BHK or 3BHK)")]
    UnknownConfiguration(String),
    #[error("age {0} is outside 1..=120")]
    AgeOutOfRange(u32),
    #[error("energy rate {0} is outside 3..=10")]
    RateOutOfRange(u32),
}

/// Settings error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tariff.currency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
