//! Utility functions
//!
//! Provides logging setup and best-effort user output.

pub mod logging;
pub mod output;
