//! End-to-end checks of validation, estimation and projection through the
//! library API.

mod common;

use common::{all_appliance_subsets, assert_close, complete_submission};
use home_energy_calc::error::ValidationError;
use home_energy_calc::estimate::{BreakdownLine, Category, EstimationResult, estimate};
use home_energy_calc::household::{
    Age, Appliance, ApplianceSelection, HomeConfiguration, HousingType,
};
use home_energy_calc::projection::{EnergyRate, project};
use home_energy_calc::runner::calculate;

fn labels(result: &EstimationResult) -> Vec<String> {
    result.breakdown().iter().map(BreakdownLine::label).collect()
}

#[test]
fn one_bhk_without_appliances_is_base_only() {
    let result = estimate(HomeConfiguration::OneBhk, &ApplianceSelection::default());
    assert_eq!(result.total_kwh(), 2.4);
    assert_eq!(labels(&result), ["1BHK Base"]);
    assert_eq!(result.breakdown()[0].energy_kwh, 2.4);
}

#[test]
fn two_bhk_with_ac() {
    let appliances = ApplianceSelection {
        air_conditioning: true,
        ..ApplianceSelection::default()
    };
    let result = estimate(HomeConfiguration::TwoBhk, &appliances);
    assert_eq!(result.total_kwh(), 6.6);
    assert_eq!(labels(&result), ["2BHK Base", "Air Conditioning"]);
}

#[test]
fn three_bhk_with_everything_keeps_fixed_order() {
    let result = estimate(HomeConfiguration::ThreeBhk, &ApplianceSelection::all());
    assert_eq!(result.total_kwh(), 13.8);
    assert_eq!(
        labels(&result),
        [
            "3BHK Base",
            "Air Conditioning",
            "Refrigerator",
            "Washing Machine"
        ]
    );
}

#[test]
fn total_is_base_plus_three_per_appliance() {
    for configuration in HomeConfiguration::ALL {
        for appliances in all_appliance_subsets() {
            let result = estimate(configuration, &appliances);
            let expected = configuration.base_energy_kwh()
                + Appliance::ENERGY_KWH * appliances.count() as f64;
            assert_close(result.total_kwh(), expected);
            assert_eq!(result.breakdown().len(), 1 + appliances.count());

            let sum: f64 = result.breakdown().iter().map(|l| l.energy_kwh).sum();
            assert_eq!(result.total_kwh(), sum);
        }
    }
}

#[test]
fn estimation_is_idempotent() {
    for configuration in HomeConfiguration::ALL {
        for appliances in all_appliance_subsets() {
            assert_eq!(
                estimate(configuration, &appliances),
                estimate(configuration, &appliances)
            );
        }
    }
}

#[test]
fn validation_truth_table_ignores_age() {
    let complete = complete_submission();
    assert!(complete.validate());

    let mut s = complete.clone();
    s.name.clear();
    assert!(!s.validate());

    let mut s = complete.clone();
    s.city.clear();
    assert!(!s.validate());

    let mut s = complete.clone();
    s.area.clear();
    assert!(!s.validate());

    let mut s = complete.clone();
    s.housing_type = None;
    assert!(!s.validate());

    let mut s = complete.clone();
    s.configuration = None;
    assert!(!s.validate());

    for age in [1_u32, 25, 120] {
        let mut s = complete.clone();
        s.age = Age::try_from(age).unwrap();
        assert!(s.validate());
    }

    // Appliances are optional.
    let mut s = complete;
    s.appliances = ApplianceSelection::default();
    assert!(s.validate());
}

#[test]
fn invalid_submission_yields_generic_error() {
    let mut s = complete_submission();
    s.housing_type = None;
    let err = calculate(s, EnergyRate::default()).unwrap_err();
    assert_eq!(err, ValidationError);
    assert_eq!(err.to_string(), "missing required fields");
}

#[test]
fn projections_scale_with_rate() {
    let result = estimate(HomeConfiguration::ThreeBhk, &ApplianceSelection::all());
    let total = result.total_kwh();
    for r in EnergyRate::MIN..=EnergyRate::MAX {
        let rate = EnergyRate::try_from(u32::from(r)).unwrap();
        let p = project(&result, rate);
        let rate = f64::from(r);
        assert_close(p.daily_cost, total * rate);
        assert_close(p.monthly_energy_kwh, total * 30.0);
        assert_close(p.yearly_energy_kwh, total * 365.0);
        assert_close(p.monthly_cost, total * 30.0 * rate);
        assert_close(p.yearly_cost, total * 365.0 * rate);
    }
}

#[test]
fn percentages_sum_to_one_hundred() {
    for configuration in HomeConfiguration::ALL {
        for appliances in all_appliance_subsets() {
            let p = project(&estimate(configuration, &appliances), EnergyRate::default());
            let sum: f64 = p.rows.iter().map(|r| r.percentage).sum();
            assert_close(sum, 100.0);
        }
    }
}

#[test]
fn zero_total_reports_zero_percent() {
    let result = EstimationResult::from_lines(vec![BreakdownLine::new(
        Category::Appliance(Appliance::Refrigerator),
        0.0,
    )]);
    let p = project(&result, EnergyRate::default());
    assert_eq!(p.total_kwh, 0.0);
    assert!(p.rows.iter().all(|r| r.percentage == 0.0));
    assert_eq!(p.yearly_cost, 0.0);

    let empty = project(&EstimationResult::default(), EnergyRate::default());
    assert!(empty.rows.is_empty());
    assert_eq!(empty.daily_cost, 0.0);
}

#[test]
fn unknown_configuration_is_rejected_at_parse() {
    assert!("4BHK".parse::<HomeConfiguration>().is_err());
    assert!("Bungalow".parse::<HousingType>().is_err());
    assert_eq!(
        "2bhk".parse::<HomeConfiguration>().ok(),
        Some(HomeConfiguration::TwoBhk)
    );
}

#[test]
fn full_calculation_report_uses_chosen_rate() {
    let rate = EnergyRate::try_from(7_u32).unwrap();
    let calc = calculate(complete_submission(), rate).unwrap();
    let summary = calc.report("₹").summary();
    assert!(summary.starts_with("Hi Asha!"));
    assert!(summary.contains("6.6 kWh"));
    assert!(summary.contains("at ₹7 per kWh"));
}
