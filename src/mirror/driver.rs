//! Mirror driver
//!
//! Runs one end-to-end job: open a client, copy every file of the remote
//! directory into the local one, report progress and elapsed time.

use log::info;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::client::{ConnectionTarget, TransferClient};
use crate::error::MirrorError;
use crate::mirror::paths::JobPaths;
use crate::mirror::results::MirrorReport;
use crate::protocol::FtpSession;
use crate::storage::{create_directory, create_local_file};
use crate::utils::output::emit;

/// Makes sure the local destination exists before any connection is made.
pub fn prepare_local_dir(path: &Path) -> Result<(), MirrorError> {
    create_directory(path).map_err(|source| MirrorError::LocalDirectory {
        path: path.to_path_buf(),
        source,
    })
}

/// One mirror job. Never retries; the first failure ends it.
#[derive(Debug, Clone)]
pub struct MirrorJob {
    target: ConnectionTarget,
    paths: JobPaths,
}

impl MirrorJob {
    pub fn new(target: ConnectionTarget, paths: JobPaths) -> Self {
        Self { target, paths }
    }

    pub fn paths(&self) -> &JobPaths {
        &self.paths
    }

    /// Runs the job over `session`, writing progress lines and the elapsed
    /// time to `out`.
    ///
    /// The local directory must already exist (see [`prepare_local_dir`]).
    /// The client is closed on every exit path.
    pub fn run<S: FtpSession>(
        &self,
        session: S,
        out: &mut dyn Write,
    ) -> Result<MirrorReport, MirrorError> {
        let start = Instant::now();
        let local_dir = self.paths.full_local_path();

        info!(
            "Mirroring {} from {} into {}",
            self.paths.full_remote_path().display(),
            self.paths.server(),
            local_dir.display()
        );

        let mut client = TransferClient::open_with(session, self.target.clone())?;

        let files = client.download_all_files(
            self.paths.full_remote_path(),
            |name| {
                let path = local_dir.join(name);
                create_local_file(&path).map_err(|source| MirrorError::LocalFile { path, source })
            },
            |message| {
                emit(out, format_args!("{}\n", message));
            },
        )?;

        client.close()?;

        let report = MirrorReport {
            files,
            elapsed: start.elapsed(),
        };
        info!("Mirrored {} files", report.files);

        emit(out, format_args!("\n"));
        emit(out, format_args!("elapsed time: {:.0} (ms)\n", report.elapsed_millis()));

        Ok(report)
    }
}
