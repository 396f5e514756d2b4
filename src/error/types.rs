//! Error types
//!
//! Defines domain-specific error types for each layer of the mirror utility.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Command line resolution errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingOptions(Vec<String>),
    UnrecognizedOption(String),
    Invalid(String),
    HelpRequested,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingOptions(names) => {
                write!(f, "Missing required options: {}", names.join(", "))
            }
            ParseError::UnrecognizedOption(flag) => write!(f, "Unrecognized option: {}", flag),
            ParseError::Invalid(msg) => write!(f, "Invalid arguments: {}", msg),
            ParseError::HelpRequested => write!(f, "Help requested"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure reported by the FTP session collaborator
#[derive(Debug)]
pub struct SessionError {
    message: String,
}

impl SessionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_connected() -> Self {
        Self::new("no control connection")
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::new(error.to_string())
    }
}

impl From<suppaftp::FtpError> for SessionError {
    fn from(error: suppaftp::FtpError) -> Self {
        SessionError::new(error.to_string())
    }
}

/// Transfer client errors
#[derive(Debug)]
pub enum ClientError {
    Connect {
        host: String,
        port: u16,
        reason: String,
    },
    Login {
        host: String,
        port: u16,
    },
    Communication(SessionError),
    InvalidState(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connect { host, port, reason } => write!(
                f,
                "Unable to connect to FTP Server: {} port: {} ({})",
                host, port, reason
            ),
            ClientError::Login { host, port } => {
                write!(f, "Unable to login to FTP Server: {} port: {}", host, port)
            }
            ClientError::Communication(e) => write!(f, "FTP communication error: {}", e),
            ClientError::InvalidState(msg) => write!(f, "Invalid client state: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Communication(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SessionError> for ClientError {
    fn from(error: SessionError) -> Self {
        ClientError::Communication(error)
    }
}

/// Mirror job errors
#[derive(Debug)]
pub enum MirrorError {
    LocalDirectory { path: PathBuf, source: io::Error },
    LocalFile { path: PathBuf, source: io::Error },
    Client(ClientError),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::LocalDirectory { path, source } => write!(
                f,
                "Unable to create local directory: [{}] reason: [{}]",
                path.display(),
                source
            ),
            MirrorError::LocalFile { .. } => {
                write!(f, "Cannot create files in the local directory...")
            }
            MirrorError::Client(_) => write!(f, "Communication with FTP server failed..."),
        }
    }
}

impl std::error::Error for MirrorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MirrorError::LocalDirectory { source, .. } => Some(source),
            MirrorError::LocalFile { source, .. } => Some(source),
            MirrorError::Client(e) => Some(e),
        }
    }
}

impl From<ClientError> for MirrorError {
    fn from(error: ClientError) -> Self {
        MirrorError::Client(error)
    }
}

/// Top level error that encompasses every way a run can end early
#[derive(Debug)]
pub enum AppError {
    Parse(ParseError),
    Config(config::ConfigError),
    Mirror(MirrorError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Parse(e) => {
                write!(f, "Parsing of command line arguments failed: {}", e)
            }
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Mirror(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ParseError> for AppError {
    fn from(error: ParseError) -> Self {
        AppError::Parse(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<MirrorError> for AppError {
    fn from(error: MirrorError) -> Self {
        AppError::Mirror(error)
    }
}

impl From<ClientError> for AppError {
    fn from(error: ClientError) -> Self {
        AppError::Mirror(MirrorError::Client(error))
    }
}
