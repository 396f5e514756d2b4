//! Transfer client
//!
//! Owns one server connection, its lifecycle, and the listing and retrieval
//! operations performed over it.

pub mod state;
pub mod target;
pub mod transfer;

pub use state::ClientState;
pub use target::ConnectionTarget;
pub use transfer::{TransferClient, progress_message};
