//! FTP Protocol collaborator
//!
//! Wraps the external FTP client library behind the `FtpSession` trait and
//! models the listing entries and reply codes the mirror works with.

pub mod listing;
pub mod responses;
pub mod session;
pub mod suppa;

#[cfg(test)]
pub(crate) mod mock;

pub use listing::{EntryKind, RemoteEntry};
pub use responses::ReplyCode;
pub use session::FtpSession;
pub use suppa::SuppaSession;
