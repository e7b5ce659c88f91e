//! Command line, configuration, errors, logging and image I/O

/// Argument parsing and run orchestration
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// Image decoding, encoding and output naming
pub mod image;
/// Log backend setup
pub mod logging;
/// Progress bar over row bands
pub mod progress;
