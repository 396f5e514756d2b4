//! Module `transfer`
//!
//! `TransferClient` owns one FTP session and drives it through the
//! connect / login / passive sequence, listing and retrieval, and the
//! logout / disconnect teardown.

use log::{debug, info, warn};
use std::io::Write;
use std::path::{Component, Path};

use crate::client::state::ClientState;
use crate::client::target::ConnectionTarget;
use crate::error::ClientError;
use crate::protocol::{FtpSession, RemoteEntry, SuppaSession};

/// Progress message announcing the `index`-th (0-based) of `total` files.
pub fn progress_message(index: usize, total: usize, name: &str) -> String {
    format!("Downloading ({} of {}):[{}]", index + 1, total, name)
}

/// Remote path of `name` inside `dir`, always `/`-separated.
fn remote_path(dir: &Path, name: &str) -> String {
    let dir = dir.to_string_lossy();
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() && dir.starts_with('/') {
        format!("/{}", name)
    } else if trimmed.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", trimmed, name)
    }
}

/// Whether `name` is one plain path component, so joining it onto a local
/// directory cannot leave that directory.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// A single session with an FTP server.
///
/// Dropping an open client closes it, so the connection is released on every
/// exit path of the code that owns it.
pub struct TransferClient<S: FtpSession> {
    session: S,
    target: ConnectionTarget,
    state: ClientState,
}

impl TransferClient<SuppaSession> {
    /// Opens a client over a fresh `suppaftp` session.
    pub fn connect(target: ConnectionTarget) -> Result<Self, ClientError> {
        Self::open_with(SuppaSession::new(), target)
    }
}

impl<S: FtpSession> TransferClient<S> {
    /// Creates an unopened client.
    pub fn new(session: S, target: ConnectionTarget) -> Self {
        Self {
            session,
            target,
            state: ClientState::Unopened,
        }
    }

    /// Creates a client and opens it.
    pub fn open_with(session: S, target: ConnectionTarget) -> Result<Self, ClientError> {
        let mut client = Self::new(session, target);
        client.open()?;
        Ok(client)
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Connects, authenticates and switches to passive mode, strictly in
    /// that order.
    ///
    /// Any failure tears the connection down before the error is returned
    /// and leaves the client `Failed`.
    pub fn open(&mut self) -> Result<(), ClientError> {
        if self.state != ClientState::Unopened {
            return Err(ClientError::InvalidState(format!(
                "cannot open a client that is {}",
                self.state
            )));
        }
        self.state = ClientState::Opening;

        match self.open_sequence() {
            Ok(()) => {
                self.state = ClientState::Open;
                Ok(())
            }
            Err(e) => {
                self.session.disconnect();
                self.state = ClientState::Failed;
                Err(e)
            }
        }
    }

    fn open_sequence(&mut self) -> Result<(), ClientError> {
        let host = self.target.host().to_string();
        let port = self.target.port();

        let reply = self
            .session
            .connect(&host, port)
            .map_err(|e| ClientError::Connect {
                host: host.clone(),
                port,
                reason: e.to_string(),
            })?;

        if !reply.is_positive_completion() {
            return Err(ClientError::Connect {
                host,
                port,
                reason: format!("server replied {}", reply),
            });
        }
        info!("Connected to {}:{}", host, port);

        let accepted = self
            .session
            .login(self.target.username(), self.target.password())?;
        if !accepted {
            return Err(ClientError::Login { host, port });
        }
        info!("Logged in as {}", self.target.username());

        // Passive mode keeps transfers working from behind NAT
        self.session.enter_passive_mode();
        debug!("Passive mode enabled");

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ClientError> {
        if self.state.is_open() {
            Ok(())
        } else {
            Err(ClientError::InvalidState(format!(
                "client is {}",
                self.state
            )))
        }
    }

    /// Lists `remote_dir` in server order.
    pub fn list_entries(&mut self, remote_dir: &Path) -> Result<Vec<RemoteEntry>, ClientError> {
        self.ensure_open()?;
        let entries = self
            .session
            .list_files(&remote_dir.to_string_lossy())?;
        info!(
            "Listed {} entries in {}",
            entries.len(),
            remote_dir.display()
        );
        Ok(entries)
    }

    /// Streams the content of `remote_file` into `sink`.
    ///
    /// Returns `false` when the server refuses the file (a 5xx reply such as
    /// `550`); the connection stays usable.
    pub fn retrieve_file(
        &mut self,
        remote_file: &Path,
        sink: &mut dyn Write,
    ) -> Result<bool, ClientError> {
        self.ensure_open()?;
        Ok(self
            .session
            .retrieve_file(&remote_file.to_string_lossy(), sink)?)
    }

    /// Copies every regular file of `remote_dir`, one at a time in listing
    /// order, and returns how many were copied.
    ///
    /// For each file `progress` is told first, then `sink_provider` is asked
    /// for a sink by relative file name. The sink is flushed and dropped
    /// before the next file starts, whether or not the retrieval worked.
    /// Entries that are not files are skipped, and so are file names that
    /// are not a single plain component (`../x`, `/abs`, `a/b`). A file the
    /// server refuses is logged and skipped; a transport failure ends the
    /// download.
    pub fn download_all_files<W, E, P, R>(
        &mut self,
        remote_dir: &Path,
        mut sink_provider: P,
        mut progress: R,
    ) -> Result<usize, E>
    where
        W: Write,
        E: From<ClientError>,
        P: FnMut(&Path) -> Result<W, E>,
        R: FnMut(&str),
    {
        let files: Vec<String> = self
            .list_entries(remote_dir)?
            .into_iter()
            .filter(RemoteEntry::is_file)
            .filter(|entry| {
                let plain = is_plain_file_name(entry.name());
                if !plain {
                    warn!("Skipping remote file with unsafe name {:?}", entry.name());
                }
                plain
            })
            .map(|entry| entry.name().to_string())
            .collect();
        let total = files.len();
        let mut copied = 0;

        for (index, name) in files.iter().enumerate() {
            progress(&progress_message(index, total, name));

            let mut sink = sink_provider(Path::new(name))?;
            let source = remote_path(remote_dir, name);
            info!("Retrieving {}", source);

            let result = self
                .session
                .retrieve_file(&source, &mut sink)
                .and_then(|retrieved| {
                    sink.flush()?;
                    Ok(retrieved)
                });
            drop(sink);

            if result.map_err(ClientError::from)? {
                copied += 1;
            } else {
                warn!("Server refused {}, skipping it", source);
            }
        }

        Ok(copied)
    }

    /// Logs out then disconnects. Only valid once, on an open client.
    ///
    /// The connection is dropped even when logout fails.
    pub fn close(&mut self) -> Result<(), ClientError> {
        self.ensure_open()?;
        let logout = self.session.logout();
        self.session.disconnect();
        self.state = ClientState::Closed;
        info!(
            "Closed session with {}:{}",
            self.target.host(),
            self.target.port()
        );
        logout.map_err(ClientError::from)
    }
}

impl<S: FtpSession> Drop for TransferClient<S> {
    fn drop(&mut self) {
        if self.state.is_open() {
            if let Err(e) = self.close() {
                warn!("Failed to close FTP session cleanly: {}", e);
            }
        }
    }
}
