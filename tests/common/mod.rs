//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use home_energy_calc::household::{
    Age, ApplianceSelection, HomeConfiguration, HousingType, Submission,
};

/// A complete form: 2BHK flat with air conditioning only.
pub fn complete_submission() -> Submission {
    Submission {
        name: "Asha".into(),
        age: Age::default(),
        city: "Pune".into(),
        area: "Kothrud".into(),
        housing_type: Some(HousingType::Flat),
        configuration: Some(HomeConfiguration::TwoBhk),
        appliances: ApplianceSelection {
            air_conditioning: true,
            ..ApplianceSelection::default()
        },
    }
}

/// Every subset of the three appliances.
pub fn all_appliance_subsets() -> Vec<ApplianceSelection> {
    (0..8_u8)
        .map(|bits| ApplianceSelection {
            air_conditioning: bits & 1 != 0,
            refrigerator: bits & 2 != 0,
            washing_machine: bits & 4 != 0,
        })
        .collect()
}

/// JSON body for `POST /estimate` matching [`complete_submission`].
pub fn complete_request_json() -> &'static str {
    r#"{
        "name": "Asha",
        "city": "Pune",
        "area": "Kothrud",
        "housing_type": "Flat",
        "configuration": "2BHK",
        "air_conditioning": true
    }"#
}

/// Asserts two floats agree to within 1e-9.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
