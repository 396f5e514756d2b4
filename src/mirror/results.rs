//! Mirror result types
//!
//! Defines result structures returned by mirror jobs.

use std::time::Duration;

/// Result of a completed mirror job
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorReport {
    pub files: usize,
    pub elapsed: Duration,
}

impl MirrorReport {
    /// Elapsed wall time in milliseconds, keeping sub-millisecond precision
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 * 1e-6
    }
}
