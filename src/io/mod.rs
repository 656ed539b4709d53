//! File export helpers.

/// CSV export of the breakdown table.
pub mod export;
