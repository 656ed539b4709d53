//! API request and response types.
//!
//! The `POST /estimate` success body is [`crate::report::EstimateRecord`], shared with the
//! CLI's `--json` output.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::household::{Age, ApplianceSelection, Submission, parse_selection};
use crate::projection::EnergyRate;

/// Body of `POST /estimate`. Omitted fields take their form defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimateRequest {
    pub name: String,
    pub age: Age,
    pub city: String,
    pub area: String,
    /// `"Flat"`, `"Tenament"`, or empty / `"Select..."` for unset.
    pub housing_type: Option<String>,
    /// `"1BHK"`, `"2BHK"`, `"3BHK"`, or empty / `"Select..."` for unset.
    pub configuration: Option<String>,
    pub air_conditioning: bool,
    pub refrigerator: bool,
    pub washing_machine: bool,
    /// Overrides the configured tariff for this request.
    pub rate: Option<EnergyRate>,
}

impl EstimateRequest {
    /// Parses the selector strings into a submission.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for a selector value outside its closed set.
    pub fn into_submission(self) -> Result<Submission, ParseError> {
        Ok(Submission {
            housing_type: parse_selection(self.housing_type.as_deref())?,
            configuration: parse_selection(self.configuration.as_deref())?,
            name: self.name,
            age: self.age,
            city: self.city,
            area: self.area,
            appliances: ApplianceSelection {
                air_conditioning: self.air_conditioning,
                refrigerator: self.refrigerator,
                washing_machine: self.washing_machine,
            },
        })
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error kind, e.g. `"ValidationError"`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}
