//! Cost and period projections derived from an estimation result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::estimate::{Category, EstimationResult};

/// Days used for the monthly projection.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days used for the yearly projection.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Tariff in currency units per kWh, bounded to `3..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EnergyRate(u8);

impl EnergyRate {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 10;

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn per_kwh(self) -> f64 {
        f64::from(self.0)
    }

    /// One unit higher, saturating at [`EnergyRate::MAX`].
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One unit lower, saturating at [`EnergyRate::MIN`].
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for EnergyRate {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for EnergyRate {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ParseError::RateOutOfRange(value))
        }
    }
}

impl From<EnergyRate> for u32 {
    fn from(rate: EnergyRate) -> Self {
        u32::from(rate.0)
    }
}

impl fmt::Display for EnergyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds to `places` decimals with ties to even, for display columns.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: Category,
    /// Daily energy (kWh).
    pub energy_kwh: f64,
    /// Share of the daily total (0–100), unrounded.
    pub percentage: f64,
    /// Daily cost at the projection rate, unrounded.
    pub cost: f64,
}

/// Breakdown table plus daily, monthly and yearly figures at one rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub rate: EnergyRate,
    /// Daily energy (kWh).
    pub total_kwh: f64,
    /// Daily cost.
    pub daily_cost: f64,
    pub rows: Vec<BreakdownRow>,
    pub monthly_energy_kwh: f64,
    pub yearly_energy_kwh: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

impl Projection {
    /// Projects an estimation result at the given rate.
    ///
    /// A zero total reports 0% for every line instead of dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use home_energy_calc::estimate::estimate;
    /// use home_energy_calc::household::{ApplianceSelection, HomeConfiguration};
    /// use home_energy_calc::projection::{EnergyRate, Projection};
    ///
    /// let result = estimate(HomeConfiguration::OneBhk, &ApplianceSelection::default());
    /// let p = Projection::from_result(&result, EnergyRate::default());
    /// assert_eq!(p.rows[0].percentage, 100.0);
    /// assert_eq!(p.rows[0].cost, 12.0);
    /// ```
    pub fn from_result(result: &EstimationResult, rate: EnergyRate) -> Self {
        let total = result.total_kwh();
        let per_kwh = rate.per_kwh();

        let rows = result
            .breakdown()
            .iter()
            .map(|line| BreakdownRow {
                category: line.category,
                energy_kwh: line.energy_kwh,
                percentage: if total > 0.0 {
                    line.energy_kwh / total * 100.0
                } else {
                    0.0
                },
                cost: line.energy_kwh * per_kwh,
            })
            .collect();

        let monthly_energy_kwh = total * DAYS_PER_MONTH;
        let yearly_energy_kwh = total * DAYS_PER_YEAR;

        Self {
            rate,
            total_kwh: total,
            daily_cost: total * per_kwh,
            rows,
            monthly_energy_kwh,
            yearly_energy_kwh,
            monthly_cost: monthly_energy_kwh * per_kwh,
            yearly_cost: yearly_energy_kwh * per_kwh,
        }
    }

    /// `(label, share %)` pairs for the distribution chart.
    pub fn distribution(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|r| (r.category.to_string(), r.percentage))
            .collect()
    }

    /// `(label, kWh)` pairs for the magnitude chart.
    pub fn magnitudes(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|r| (r.category.to_string(), r.energy_kwh))
            .collect()
    }
}

/// Free-function form of [`Projection::from_result`].
pub fn project(result: &EstimationResult, rate: EnergyRate) -> Projection {
    Projection::from_result(result, rate)
}
