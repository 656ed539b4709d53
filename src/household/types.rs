//! Closed input types for the household form: selectors, bounded age, and
//! appliance toggles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseError;

/// Placeholder label shown by an unset selector.
pub const PLACEHOLDER: &str = "Select...";

/// Dwelling type. Recorded on the profile but does not affect the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HousingType {
    Flat,
    Tenament,
}

impl HousingType {
    /// Selector options in display order.
    pub const ALL: [Self; 2] = [Self::Flat, Self::Tenament];
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "Flat",
            Self::Tenament => "Tenament",
        })
    }
}

impl FromStr for HousingType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "tenament" => Ok(Self::Tenament),
            _ => Err(ParseError::UnknownHousingType(s.to_string())),
        }
    }
}

impl Serialize for HousingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Home size as a Bedroom-Hall-Kitchen count.
///
/// Used purely as a lookup key for the base daily consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeConfiguration {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

impl HomeConfiguration {
    /// Selector options in display order.
    pub const ALL: [Self; 3] = [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk];

    /// Base daily consumption (kWh) before any appliance is added.
    pub const fn base_energy_kwh(self) -> f64 {
        match self {
            Self::OneBhk => 2.4,
            Self::TwoBhk => 3.6,
            Self::ThreeBhk => 4.8,
        }
    }
}

impl fmt::Display for HomeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
            Self::ThreeBhk => "3BHK",
        })
    }
}

impl FromStr for HomeConfiguration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1bhk" => Ok(Self::OneBhk),
            "2bhk" => Ok(Self::TwoBhk),
            "3bhk" => Ok(Self::ThreeBhk),
            _ => Err(ParseError::UnknownConfiguration(s.to_string())),
        }
    }
}

impl Serialize for HomeConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses a selector value, mapping an empty string or [`PLACEHOLDER`] to unset.
///
/// # Errors
///
/// Returns the type's parse error for any other unrecognized value.
///
/// # Examples
///
/// ```
/// use home_energy_calc::household::{HomeConfiguration, parse_selection};
///
/// let unset: Option<HomeConfiguration> = parse_selection(Some("Select...")).unwrap();
/// assert_eq!(unset, None);
/// let two = parse_selection::<HomeConfiguration>(Some("2bhk")).unwrap();
/// assert_eq!(two, Some(HomeConfiguration::TwoBhk));
/// ```
pub fn parse_selection<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, T::Err> {
    match raw.map(str::trim) {
        None | Some("") | Some(PLACEHOLDER) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Age in whole years, bounded to `1..=120`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 120;

    pub fn get(self) -> u8 {
        self.0
    }

    /// One year older, saturating at [`Age::MAX`].
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One year younger, saturating at [`Age::MIN`].
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(25)
    }
}

impl TryFrom<u32> for Age {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ParseError::AgeOutOfRange(value))
        }
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        u32::from(age.0)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Major appliances that add a fixed increment to daily consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appliance {
    AirConditioning,
    Refrigerator,
    WashingMachine,
}

impl Appliance {
    /// Evaluation order for breakdown lines.
    pub const ALL: [Self; 3] = [
        Self::AirConditioning,
        Self::Refrigerator,
        Self::WashingMachine,
    ];

    /// Daily consumption added by an active appliance (kWh).
    pub const ENERGY_KWH: f64 = 3.0;
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AirConditioning => "Air Conditioning",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
        })
    }
}

impl Serialize for Appliance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Three independent appliance toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplianceSelection {
    pub air_conditioning: bool,
    pub refrigerator: bool,
    pub washing_machine: bool,
}

impl ApplianceSelection {
    /// Every appliance switched on.
    pub fn all() -> Self {
        Self {
            air_conditioning: true,
            refrigerator: true,
            washing_machine: true,
        }
    }

    pub fn is_selected(&self, appliance: Appliance) -> bool {
        match appliance {
            Appliance::AirConditioning => self.air_conditioning,
            Appliance::Refrigerator => self.refrigerator,
            Appliance::WashingMachine => self.washing_machine,
        }
    }

    pub fn toggle(&mut self, appliance: Appliance) {
        let flag = match appliance {
            Appliance::AirConditioning => &mut self.air_conditioning,
            Appliance::Refrigerator => &mut self.refrigerator,
            Appliance::WashingMachine => &mut self.washing_machine,
        };
        *flag = !*flag;
    }

    /// Selected appliances in evaluation order.
    pub fn selected(&self) -> impl Iterator<Item = Appliance> + '_ {
        Appliance::ALL
            .into_iter()
            .filter(|&a| self.is_selected(a))
    }

    pub fn count(&self) -> usize {
        self.selected().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_parses_case_insensitively() {
        assert_eq!("1bhk".parse::<HomeConfiguration>(), Ok(HomeConfiguration::OneBhk));
        assert_eq!("2BHK".parse::<HomeConfiguration>(), Ok(HomeConfiguration::TwoBhk));
        assert_eq!(" 3Bhk ".parse::<HomeConfiguration>(), Ok(HomeConfiguration::ThreeBhk));
    }

    #[test]
    fn unknown_configuration_is_rejected() {
        let err = "4BHK".parse::<HomeConfiguration>().unwrap_err();
        assert_eq!(err, ParseError::UnknownConfiguration("4BHK".into()));
    }

    #[test]
    fn housing_type_round_trips_through_display() {
        for h in HousingType::ALL {
            assert_eq!(h.to_string().parse::<HousingType>(), Ok(h));
        }
        assert!("bungalow".parse::<HousingType>().is_err());
    }

    #[test]
    fn placeholder_and_empty_are_unset() {
        assert_eq!(parse_selection::<HousingType>(None), Ok(None));
        assert_eq!(parse_selection::<HousingType>(Some("")), Ok(None));
        assert_eq!(parse_selection::<HousingType>(Some(PLACEHOLDER)), Ok(None));
        assert_eq!(
            parse_selection::<HousingType>(Some("Flat")),
            Ok(Some(HousingType::Flat))
        );
        assert!(parse_selection::<HomeConfiguration>(Some("studio")).is_err());
    }

    #[test]
    fn base_energy_constants() {
        assert_eq!(HomeConfiguration::OneBhk.base_energy_kwh(), 2.4);
        assert_eq!(HomeConfiguration::TwoBhk.base_energy_kwh(), 3.6);
        assert_eq!(HomeConfiguration::ThreeBhk.base_energy_kwh(), 4.8);
    }

    #[test]
    fn age_bounds() {
        assert!(Age::try_from(0_u32).is_err());
        assert_eq!(Age::try_from(1_u32).map(Age::get), Ok(1));
        assert_eq!(Age::try_from(120_u32).map(Age::get), Ok(120));
        assert_eq!(Age::try_from(121_u32), Err(ParseError::AgeOutOfRange(121)));
        assert_eq!(Age::default().get(), 25);
    }

    #[test]
    fn age_stepper_saturates() {
        let max = Age::try_from(120_u32).unwrap();
        assert_eq!(max.increment(), max);
        let min = Age::try_from(1_u32).unwrap();
        assert_eq!(min.decrement(), min);
        assert_eq!(Age::default().increment().get(), 26);
    }

    #[test]
    fn age_deserializes_with_bounds() {
        let ok: Result<Age, _> = serde_json::from_str("42");
        assert_eq!(ok.map(Age::get).ok(), Some(42));
        let too_old: Result<Age, _> = serde_json::from_str("130");
        assert!(too_old.is_err());
    }

    #[test]
    fn selected_keeps_fixed_order() {
        let sel = ApplianceSelection {
            air_conditioning: false,
            refrigerator: true,
            washing_machine: true,
        };
        let order: Vec<Appliance> = sel.selected().collect();
        assert_eq!(order, vec![Appliance::Refrigerator, Appliance::WashingMachine]);
        assert_eq!(ApplianceSelection::all().count(), 3);
        assert_eq!(ApplianceSelection::default().count(), 0);
    }

    #[test]
    fn toggle_flips_one_flag() {
        let mut sel = ApplianceSelection::default();
        sel.toggle(Appliance::WashingMachine);
        assert!(sel.washing_machine);
        assert!(!sel.air_conditioning);
        sel.toggle(Appliance::WashingMachine);
        assert_eq!(sel, ApplianceSelection::default());
    }
}
