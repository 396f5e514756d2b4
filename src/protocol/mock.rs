//! Recording `FtpSession` used by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::error::SessionError;
use crate::protocol::listing::RemoteEntry;
use crate::protocol::responses::{READY, ReplyCode};
use crate::protocol::session::FtpSession;

/// Shared call log, kept by the test after the session moves into a client
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub struct MockSession {
    pub log: CallLog,
    pub reply_code: u32,
    pub login_accepted: bool,
    pub entries: Vec<RemoteEntry>,
    pub contents: HashMap<String, Vec<u8>>,
    /// Number of retrievals that succeed before the transport fails
    pub fail_retrieve_after: Option<usize>,
    pub fail_logout: bool,
    /// Paths the server refuses to send
    pub refused: Vec<String>,
    pub retrieved: usize,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            reply_code: READY,
            login_accepted: true,
            entries: Vec::new(),
            contents: HashMap::new(),
            fail_retrieve_after: None,
            fail_logout: false,
            refused: Vec::new(),
            retrieved: 0,
        }
    }
}

impl MockSession {
    pub fn with_files(entries: Vec<RemoteEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    fn record(&self, call: String) {
        self.log.borrow_mut().push(call);
    }
}

impl FtpSession for MockSession {
    fn connect(&mut self, host: &str, port: u16) -> Result<ReplyCode, SessionError> {
        self.record(format!("connect {}:{}", host, port));
        Ok(ReplyCode(self.reply_code))
    }

    fn login(&mut self, user: &str, password: &str) -> Result<bool, SessionError> {
        self.record(format!("login {}/{}", user, password));
        Ok(self.login_accepted)
    }

    fn enter_passive_mode(&mut self) {
        self.record("passive".to_string());
    }

    fn list_files(&mut self, path: &str) -> Result<Vec<RemoteEntry>, SessionError> {
        self.record(format!("list {}", path));
        Ok(self.entries.clone())
    }

    fn retrieve_file(&mut self, path: &str, sink: &mut dyn Write) -> Result<bool, SessionError> {
        self.record(format!("retrieve {}", path));
        if self.fail_retrieve_after == Some(self.retrieved) {
            return Err(SessionError::new("connection reset by peer"));
        }
        self.retrieved += 1;
        if self.refused.iter().any(|refused| refused == path) {
            return Ok(false);
        }
        if let Some(bytes) = self.contents.get(path) {
            sink.write_all(bytes)?;
        }
        Ok(true)
    }

    fn logout(&mut self) -> Result<(), SessionError> {
        self.record("logout".to_string());
        if self.fail_logout {
            return Err(SessionError::new("421 service not available"));
        }
        Ok(())
    }

    fn disconnect(&mut self) {
        self.record("disconnect".to_string());
    }
}
