//! FTP Response handling
//!
//! Reply codes the client inspects while opening a session.

use std::fmt;

/// Standard FTP response codes
pub const READY: u32 = 220;
pub const LOGIN_SUCCESS: u32 = 230;
pub const NOT_LOGGED_IN: u32 = 530;

/// Numeric reply code sent by the server on the control connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyCode(pub u32);

impl ReplyCode {
    /// 2xx: the requested action completed successfully
    pub fn is_positive_completion(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
