//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the mirror, defaulting to warnings and above
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
