//! Daily energy estimator.

use tracing::debug;

use super::types::{BreakdownLine, Category, EstimationResult};
use crate::household::{Appliance, ApplianceSelection, HomeConfiguration, Profile};

/// Estimates daily consumption from the home configuration and appliances.
///
/// Emits the base line first, then one 3.0 kWh line per selected appliance
/// in the fixed order air conditioning, refrigerator, washing machine.
///
/// # Examples
///
/// ```
/// use home_energy_calc::estimate::estimate;
/// use home_energy_calc::household::{ApplianceSelection, HomeConfiguration};
///
/// let appliances = ApplianceSelection { air_conditioning: true, ..Default::default() };
/// let result = estimate(HomeConfiguration::TwoBhk, &appliances);
/// assert_eq!(result.total_kwh(), 6.6);
/// assert_eq!(result.breakdown().len(), 2);
/// ```
pub fn estimate(
    configuration: HomeConfiguration,
    appliances: &ApplianceSelection,
) -> EstimationResult {
    let mut lines = Vec::with_capacity(1 + Appliance::ALL.len());
    lines.push(BreakdownLine::new(
        Category::Base(configuration),
        configuration.base_energy_kwh(),
    ));
    lines.extend(
        appliances
            .selected()
            .map(|a| BreakdownLine::new(Category::Appliance(a), Appliance::ENERGY_KWH)),
    );

    let result = EstimationResult::from_lines(lines);
    debug!(
        %configuration,
        appliances = appliances.count(),
        total_kwh = result.total_kwh(),
        "estimated daily consumption"
    );
    result
}

/// Convenience wrapper for a validated profile.
pub fn estimate_profile(profile: &Profile) -> EstimationResult {
    estimate(profile.configuration, &profile.appliances)
}
