//! `FtpSession` backed by the `suppaftp` blocking client.

use log::{debug, info, warn};
use std::io::{self, Write};
use suppaftp::{FtpError, FtpStream, Mode};

use crate::error::SessionError;
use crate::protocol::listing::RemoteEntry;
use crate::protocol::responses::{READY, ReplyCode};
use crate::protocol::session::FtpSession;

/// Session over a plain (non-TLS) control connection
#[derive(Default)]
pub struct SuppaSession {
    stream: Option<FtpStream>,
}

impl SuppaSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&mut self) -> Result<&mut FtpStream, SessionError> {
        self.stream.as_mut().ok_or_else(SessionError::not_connected)
    }
}

impl FtpSession for SuppaSession {
    fn connect(&mut self, host: &str, port: u16) -> Result<ReplyCode, SessionError> {
        debug!("Opening control connection to {}:{}", host, port);
        match FtpStream::connect((host, port)) {
            Ok(stream) => {
                self.stream = Some(stream);
                Ok(ReplyCode(READY))
            }
            // The library only accepts a 220 greeting
            Err(FtpError::UnexpectedResponse(response)) => {
                warn!("Server {}:{} greeted with {}", host, port, response.status.code());
                Ok(ReplyCode(response.status.code()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn login(&mut self, user: &str, password: &str) -> Result<bool, SessionError> {
        match self.stream()?.login(user, password) {
            Ok(()) => Ok(true),
            Err(FtpError::UnexpectedResponse(response)) => {
                info!("Login as {} refused with {}", user, response.status.code());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn enter_passive_mode(&mut self) {
        if let Some(stream) = self.stream.as_mut() {
            stream.set_mode(Mode::Passive);
        }
    }

    fn list_files(&mut self, path: &str) -> Result<Vec<RemoteEntry>, SessionError> {
        let lines = self.stream()?.list(Some(path))?;
        Ok(lines
            .iter()
            .map(|line| RemoteEntry::from_list_line(line))
            .collect())
    }

    fn retrieve_file(&mut self, path: &str, sink: &mut dyn Write) -> Result<bool, SessionError> {
        let result = self.stream()?.retr(path, |reader| {
            io::copy(reader, &mut *sink).map_err(FtpError::ConnectionError)
        });
        match result {
            Ok(copied) => {
                debug!("Retrieved {} ({} bytes)", path, copied);
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(response)) => {
                info!("Retrieval of {} refused with {}", path, response.status.code());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn logout(&mut self) -> Result<(), SessionError> {
        self.stream()?.quit()?;
        Ok(())
    }

    fn disconnect(&mut self) {
        if self.stream.take().is_some() {
            debug!("Control connection dropped");
        }
    }
}
