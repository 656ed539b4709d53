//! Household daily energy calculator: form validation, estimation, and cost
//! projection, with CLI, HTTP and terminal front ends.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
/// Base lookup and appliance increments.
pub mod estimate;
pub mod household;
pub mod io;
pub mod logging;
pub mod projection;
pub mod report;
pub mod runner;
#[cfg(feature = "tui")]
pub mod tui;
