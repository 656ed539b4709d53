//! Energy estimation: base lookup plus fixed appliance increments.

pub mod engine;
pub mod types;

pub use engine::{estimate, estimate_profile};
pub use types::{BreakdownLine, Category, EstimationResult};
