//! Command line interface
//!
//! Argument resolution, usage text and the parameter report.

pub mod args;

pub use args::{CliArgs, PROGRAM_NAME};
