//! Text rendering of a projection and the static reference card.

use std::fmt;

use serde::Serialize;

use crate::household::{Appliance, HomeConfiguration};
use crate::projection::{EnergyRate, Projection, round_to};
use crate::runner::Calculation;

/// Energy-saving advice shown next to the form.
pub const ENERGY_SAVING_TIPS: &[&str] = &[
    "Set AC to 24°C for optimal efficiency",
    "Use inverter appliances to save 20-30% energy",
    "Switch to LED lighting throughout your home",
    "Unplug devices when not in use",
    "Use natural light when possible",
    "Regular maintenance of appliances improves efficiency",
];

/// Personalised result summary ready for printing.
pub struct Report<'a> {
    pub name: &'a str,
    pub currency: &'a str,
    pub projection: &'a Projection,
}

impl<'a> Report<'a> {
    pub fn new(name: &'a str, currency: &'a str, projection: &'a Projection) -> Self {
        Self {
            name,
            currency,
            projection,
        }
    }

    /// Greeting plus total and daily cost, as shown above the charts.
    pub fn summary(&self) -> String {
        let p = self.projection;
        let cur = self.currency;
        format!(
            "Hi {}! Your estimated daily energy consumption is {:.1} kWh. \
             This is equivalent to approximately {cur}{:.0} per day at {cur}{} per kWh.",
            self.name, p.total_kwh, p.daily_cost, p.rate
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.projection;
        let cur = self.currency;
        writeln!(f, "{}", self.summary())?;
        writeln!(f)?;
        writeln!(f, "--- Detailed Breakdown ---")?;
        let cost_header = format!("Cost ({cur}/day)");
        writeln!(
            f,
            "{:<18} {:>12} {:>11} {:>14}",
            "Category", "Energy (kWh)", "Percentage", cost_header
        )?;
        for row in &p.rows {
            writeln!(
                f,
                "{:<18} {:>12.1} {:>11.1} {:>14.0}",
                row.category.to_string(),
                row.energy_kwh,
                row.percentage,
                row.cost
            )?;
        }
        writeln!(f)?;
        writeln!(f, "--- Projections ---")?;
        writeln!(f, "Monthly energy:  {:.1} kWh", p.monthly_energy_kwh)?;
        writeln!(f, "Yearly energy:   {:.1} kWh", p.yearly_energy_kwh)?;
        writeln!(f, "Monthly cost:    {cur}{:.0}", p.monthly_cost)?;
        write!(f, "Yearly cost:     {cur}{:.0}", p.yearly_cost)
    }
}

/// One row of the breakdown table.
#[derive(Debug, Serialize)]
pub struct BreakdownRecord {
    pub category: String,
    pub energy_kwh: f64,
    pub percentage: f64,
    pub cost: f64,
}

/// Monthly and yearly figures.
#[derive(Debug, Serialize)]
pub struct ProjectionRecord {
    pub monthly_energy_kwh: f64,
    pub yearly_energy_kwh: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

impl From<&Projection> for ProjectionRecord {
    fn from(p: &Projection) -> Self {
        Self {
            monthly_energy_kwh: round_to(p.monthly_energy_kwh, 1),
            yearly_energy_kwh: round_to(p.yearly_energy_kwh, 1),
            monthly_cost: round_to(p.monthly_cost, 0),
            yearly_cost: round_to(p.yearly_cost, 0),
        }
    }
}

/// Machine-readable estimate, as returned by `POST /estimate` and printed by
/// `--json`.
///
/// Figures carry the same precision as the on-screen table: percentages and
/// energies to one decimal, costs to whole units. Only `total_kwh` is passed
/// through unrounded.
#[derive(Debug, Serialize)]
pub struct EstimateRecord {
    pub summary: String,
    pub total_kwh: f64,
    pub daily_cost: f64,
    pub rate: EnergyRate,
    pub currency: String,
    pub breakdown: Vec<BreakdownRecord>,
    pub projection: ProjectionRecord,
}

impl EstimateRecord {
    pub fn new(calc: &Calculation, currency: &str) -> Self {
        let p = &calc.projection;
        Self {
            summary: calc.report(currency).summary(),
            total_kwh: p.total_kwh,
            daily_cost: round_to(p.daily_cost, 0),
            rate: p.rate,
            currency: currency.to_string(),
            breakdown: p
                .rows
                .iter()
                .map(|r| BreakdownRecord {
                    category: r.category.to_string(),
                    energy_kwh: round_to(r.energy_kwh, 1),
                    percentage: round_to(r.percentage, 1),
                    cost: round_to(r.cost, 0),
                })
                .collect(),
            projection: ProjectionRecord::from(p),
        }
    }
}

/// One base-consumption entry of the reference card.
#[derive(Debug, Clone, Serialize)]
pub struct BaseEntry {
    pub configuration: HomeConfiguration,
    pub energy_kwh: f64,
}

/// One appliance entry of the reference card.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceEntry {
    pub appliance: Appliance,
    pub energy_kwh: f64,
}

/// "How it works": the constants behind the estimate and the tariff bounds.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceCard {
    pub base: Vec<BaseEntry>,
    pub appliances: Vec<ApplianceEntry>,
    pub rate_min: u8,
    pub rate_max: u8,
    pub rate_default: u8,
    pub tips: Vec<&'static str>,
}

impl ReferenceCard {
    pub fn new() -> Self {
        Self {
            base: HomeConfiguration::ALL
                .into_iter()
                .map(|configuration| BaseEntry {
                    configuration,
                    energy_kwh: configuration.base_energy_kwh(),
                })
                .collect(),
            appliances: Appliance::ALL
                .into_iter()
                .map(|appliance| ApplianceEntry {
                    appliance,
                    energy_kwh: Appliance::ENERGY_KWH,
                })
                .collect(),
            rate_min: EnergyRate::MIN,
            rate_max: EnergyRate::MAX,
            rate_default: EnergyRate::default().get(),
            tips: ENERGY_SAVING_TIPS.to_vec(),
        }
    }
}

impl Default for ReferenceCard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReferenceCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base energy consumption")?;
        for b in &self.base {
            writeln!(f, "  {}: {:.1} kWh/day", b.configuration, b.energy_kwh)?;
        }
        writeln!(f, "Appliance consumption")?;
        for a in &self.appliances {
            writeln!(f, "  {}: +{:.1} kWh/day", a.appliance, a.energy_kwh)?;
        }
        writeln!(f, "Energy saving tips")?;
        for (i, tip) in self.tips.iter().enumerate() {
            if i + 1 == self.tips.len() {
                write!(f, "  - {tip}")?;
            } else {
                writeln!(f, "  - {tip}")?;
            }
        }
        Ok(())
    }
}
