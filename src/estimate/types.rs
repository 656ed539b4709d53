//! Breakdown lines and the estimation result.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::household::{Appliance, HomeConfiguration};

/// What a breakdown line accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Base consumption of the home configuration.
    Base(HomeConfiguration),
    /// One active appliance.
    Appliance(Appliance),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(c) => write!(f, "{c} Base"),
            Self::Appliance(a) => write!(f, "{a}"),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One itemized contributor to the daily total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub category: Category,
    /// Daily energy (kWh, >= 0).
    pub energy_kwh: f64,
}

impl BreakdownLine {
    pub fn new(category: Category, energy_kwh: f64) -> Self {
        Self {
            category,
            energy_kwh,
        }
    }

    /// Display label, e.g. `"2BHK Base"` or `"Refrigerator"`.
    pub fn label(&self) -> String {
        self.category.to_string()
    }
}

/// Daily total plus the lines it was summed from.
///
/// The total is always the sum of the line energies taken in line order; it
/// is never stored independently of the lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimationResult {
    total_kwh: f64,
    breakdown: Vec<BreakdownLine>,
}

impl EstimationResult {
    /// Builds a result from lines in evaluation order.
    pub fn from_lines(breakdown: Vec<BreakdownLine>) -> Self {
        let total_kwh = breakdown.iter().map(|l| l.energy_kwh).sum();
        Self {
            total_kwh,
            breakdown,
        }
    }

    /// Total daily energy (kWh), unrounded.
    pub fn total_kwh(&self) -> f64 {
        self.total_kwh
    }

    pub fn breakdown(&self) -> &[BreakdownLine] {
        &self.breakdown
    }

    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_form_wording() {
        assert_eq!(
            Category::Base(HomeConfiguration::OneBhk).to_string(),
            "1BHK Base"
        );
        assert_eq!(
            Category::Appliance(Appliance::AirConditioning).to_string(),
            "Air Conditioning"
        );
        assert_eq!(
            BreakdownLine::new(Category::Appliance(Appliance::WashingMachine), 3.0).label(),
            "Washing Machine"
        );
    }

    #[test]
    fn total_is_sum_of_lines() {
        let result = EstimationResult::from_lines(vec![
            BreakdownLine::new(Category::Base(HomeConfiguration::ThreeBhk), 4.8),
            BreakdownLine::new(Category::Appliance(Appliance::Refrigerator), 3.0),
        ]);
        assert_eq!(result.total_kwh(), 4.8 + 3.0);
        assert_eq!(result.breakdown().len(), 2);
    }

    #[test]
    fn empty_result_has_zero_total() {
        let result = EstimationResult::default();
        assert_eq!(result.total_kwh(), 0.0);
        assert!(result.is_empty());
    }

    #[test]
    fn category_serializes_as_label() {
        let line = BreakdownLine::new(Category::Base(HomeConfiguration::TwoBhk), 3.6);
        let json = serde_json::to_value(line).unwrap();
        assert_eq!(json["category"], "2BHK Base");
        assert_eq!(json["energy_kwh"], 3.6);
    }
}
