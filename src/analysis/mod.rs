//! Post-painting analysis

/// Color and structure tallies of a painted canvas
pub mod statistics;
