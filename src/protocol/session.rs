//! FTP session collaborator
//!
//! The seam between the transfer client and the library that speaks the
//! FTP wire protocol.

use std::io::Write;

use crate::error::SessionError;
use crate::protocol::listing::RemoteEntry;
use crate::protocol::responses::ReplyCode;

/// Primitive operations on one FTP control connection.
///
/// Implementations block the calling thread until the server answers.
pub trait FtpSession {
    /// Opens the control connection and returns the greeting reply code.
    ///
    /// A refusing greeting is reported through the reply code, not as an
    /// error; `Err` means the transport itself failed.
    fn connect(&mut self, host: &str, port: u16) -> Result<ReplyCode, SessionError>;

    /// Returns `false` when the server rejects the credentials.
    fn login(&mut self, user: &str, password: &str) -> Result<bool, SessionError>;

    fn enter_passive_mode(&mut self);

    /// Entries of `path` in the order the server reported them.
    fn list_files(&mut self, path: &str) -> Result<Vec<RemoteEntry>, SessionError>;

    /// Streams `path` into `sink`. Returns `false` when the server refuses
    /// the file; `Err` means the transport failed.
    fn retrieve_file(&mut self, path: &str, sink: &mut dyn Write) -> Result<bool, SessionError>;

    fn logout(&mut self) -> Result<(), SessionError>;

    /// Drops the control connection. Calling it without a connection is a no-op.
    fn disconnect(&mut self);
}
