//! File system operations
//!
//! Local side of a mirror job: the destination directory and the files
//! written into it.

use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Result};
use std::path::Path;

/// Create a directory, including missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    debug!("Local directory ready: {}", path.display());
    Ok(())
}

/// Create (or truncate) a file and buffer writes to it
pub fn create_local_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
