//! Module `state`
//!
//! Lifecycle of a transfer client's control connection.

use std::fmt;

/// Where a `TransferClient` is in its lifecycle.
///
/// `Unopened -> Opening -> {Open | Failed}`, then `Open -> Closed`.
/// `Failed` and `Closed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Unopened,
    Opening,
    Open,
    Failed,
    Closed,
}

impl ClientState {
    /// Returns whether listing and retrieval are allowed.
    pub fn is_open(&self) -> bool {
        *self == ClientState::Open
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientState::Unopened => "unopened",
            ClientState::Opening => "opening",
            ClientState::Open => "open",
            ClientState::Failed => "failed",
            ClientState::Closed => "closed",
        };
        f.write_str(name)
    }
}
