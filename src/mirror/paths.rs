//! Job paths
//!
//! Where a mirror job reads from and writes to.

use std::path::{Path, PathBuf};

/// Server address of one job and the full remote and local paths, derived
/// once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    server: String,
    full_remote_path: PathBuf,
    full_local_path: PathBuf,
}

impl JobPaths {
    pub fn new(
        server: impl Into<String>,
        remote_base: impl AsRef<Path>,
        local_base: impl AsRef<Path>,
        dir: impl AsRef<Path>,
    ) -> Self {
        let dir = dir.as_ref();
        Self {
            server: server.into(),
            full_remote_path: remote_base.as_ref().join(dir),
            full_local_path: local_base.as_ref().join(dir),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// `remote_base / dir`
    pub fn full_remote_path(&self) -> &Path {
        &self.full_remote_path
    }

    /// `local_base / dir`
    pub fn full_local_path(&self) -> &Path {
        &self.full_local_path
    }
}
