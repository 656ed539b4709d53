//! One submission end to end: validate, estimate, project.

use tracing::{info, warn};

use crate::error::ValidationError;
use crate::estimate::{EstimationResult, estimate_profile};
use crate::household::{Profile, Submission};
use crate::projection::{EnergyRate, Projection};
use crate::report::Report;

/// Everything derived from one valid submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub profile: Profile,
    pub estimate: EstimationResult,
    pub projection: Projection,
}

impl Calculation {
    /// Text report with the given currency symbol.
    pub fn report<'a>(&'a self, currency: &'a str) -> Report<'a> {
        Report::new(&self.profile.name, currency, &self.projection)
    }
}

/// Validates a submission and, if complete, estimates and projects it.
///
/// # Errors
///
/// Returns [`ValidationError`] without computing anything when a required
/// field is empty or a selector is unset.
pub fn calculate(submission: Submission, rate: EnergyRate) -> Result<Calculation, ValidationError> {
    let profile = submission.into_profile().inspect_err(|_| {
        warn!("submission rejected: missing required fields");
    })?;
    let estimate = estimate_profile(&profile);
    let projection = Projection::from_result(&estimate, rate);
    info!(
        configuration = %profile.configuration,
        housing_type = %profile.housing_type,
        total_kwh = estimate.total_kwh(),
        rate = rate.get(),
        "calculated daily energy estimate"
    );
    Ok(Calculation {
        profile,
        estimate,
        projection,
    })
}
