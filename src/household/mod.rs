//! Input collection: the household form, its closed selector types, and
//! presence validation.

/// Raw submission and validated profile.
pub mod submission;
pub mod types;

pub use submission::{Profile, Submission};
pub use types::{
    Age, Appliance, ApplianceSelection, HomeConfiguration, HousingType, PLACEHOLDER,
    parse_selection,
};
