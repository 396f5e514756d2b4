//! Mirror module
//!
//! Copies every file of one remote directory into one local directory.

pub mod driver;
pub mod paths;
pub mod results;

pub use driver::{MirrorJob, prepare_local_dir};
pub use paths::JobPaths;
pub use results::MirrorReport;
