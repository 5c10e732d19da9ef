//! Configuration, errors, logging and the command-line front end

/// Command-line argument parsing and reporting
pub mod cli;
/// Algorithm constants and painter configuration
pub mod configuration;
/// Error types
pub mod error;
/// Logger initialization
pub mod logging;
