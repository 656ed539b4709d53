//! Raw form submission and its validated counterpart.

use serde::Serialize;

use super::types::{Age, ApplianceSelection, HomeConfiguration, HousingType};
use crate::error::ValidationError;

/// One form submission as entered, before validation.
///
/// `None` on a selector means the placeholder option is still chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub age: Age,
    pub city: String,
    pub area: String,
    pub housing_type: Option<HousingType>,
    pub configuration: Option<HomeConfiguration>,
    pub appliances: ApplianceSelection,
}

/// A submission that passed [`Submission::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub age: Age,
    pub city: String,
    pub area: String,
    pub housing_type: HousingType,
    pub configuration: HomeConfiguration,
    pub appliances: ApplianceSelection,
}

impl Submission {
    /// Returns `true` when every required field is filled and both selectors
    /// are set. Age is always in range by construction and is not checked.
    pub fn validate(&self) -> bool {
        !self.name.is_empty()
            && !self.city.is_empty()
            && !self.area.is_empty()
            && self.housing_type.is_some()
            && self.configuration.is_some()
    }

    /// Converts into a [`Profile`], or reports the single generic error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] whenever [`Submission::validate`] is false.
    pub fn into_profile(self) -> Result<Profile, ValidationError> {
        if !self.validate() {
            return Err(ValidationError);
        }
        let (Some(housing_type), Some(configuration)) = (self.housing_type, self.configuration)
        else {
            return Err(ValidationError);
        };
        Ok(Profile {
            name: self.name,
            age: self.age,
            city: self.city,
            area: self.area,
            housing_type,
            configuration,
            appliances: self.appliances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Submission {
        Submission {
            name: "Asha".into(),
            age: Age::default(),
            city: "Pune".into(),
            area: "Kothrud".into(),
            housing_type: Some(HousingType::Flat),
            configuration: Some(HomeConfiguration::TwoBhk),
            appliances: ApplianceSelection::default(),
        }
    }

    #[test]
    fn complete_submission_is_valid() {
        assert!(complete().validate());
        let profile = complete().into_profile();
        assert_eq!(
            profile.map(|p| p.configuration),
            Ok(HomeConfiguration::TwoBhk)
        );
    }

    #[test]
    fn each_missing_field_fails() {
        let cases: [fn(&mut Submission); 5] = [
            |s| s.name.clear(),
            |s| s.city.clear(),
            |s| s.area.clear(),
            |s| s.housing_type = None,
            |s| s.configuration = None,
        ];
        for clear in cases {
            let mut s = complete();
            clear(&mut s);
            assert!(!s.validate());
            assert_eq!(s.into_profile(), Err(ValidationError));
        }
    }

    #[test]
    fn default_submission_is_invalid() {
        assert!(!Submission::default().validate());
    }

    #[test]
    fn validity_does_not_depend_on_age() {
        for years in [1_u32, 25, 64, 120] {
            let mut s = complete();
            s.age = Age::try_from(years).unwrap();
            assert!(s.validate(), "age {years} should not affect validity");
        }
    }

    #[test]
    fn whitespace_text_counts_as_filled() {
        let mut s = complete();
        s.area = " ".into();
        assert!(s.validate());
    }
}
