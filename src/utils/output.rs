//! User-facing output
//!
//! Progress lines, the parameter report and diagnostics go to the job's
//! output stream. A failed write is logged and never changes the outcome
//! of a job.

use log::warn;
use std::fmt;
use std::io::Write;

/// Write `args` to `out`, logging a failure instead of returning it
pub fn emit(out: &mut dyn Write, args: fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(args) {
        warn!("Failed to write output: {}", e);
    }
}
