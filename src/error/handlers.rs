//! Error handlers
//!
//! Turns errors that reach the application boundary into a diagnostic and
//! a process exit status.

use crate::error::types::{AppError, ClientError, MirrorError, ParseError};
use crate::utils::output::emit;
use log::error;
use std::error::Error;
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_LOCAL_DIRECTORY: u8 = 3;
pub const EXIT_COMMUNICATION: u8 = 4;
pub const EXIT_LOCAL_FILE: u8 = 5;
pub const EXIT_CONFIG: u8 = 6;

/// Log an error that ended the run
pub fn handle_error(err: &AppError) {
    match err {
        AppError::Parse(ParseError::HelpRequested) => {}
        AppError::Mirror(MirrorError::Client(ClientError::Communication(e))) => {
            error!("Mirror job aborted: {}", e)
        }
        _ => error!("Mirror job aborted: {}", err),
    }
}

/// Convert error to process exit status
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Parse(ParseError::HelpRequested) => EXIT_SUCCESS,
        AppError::Parse(_) => EXIT_USAGE,
        AppError::Config(_) => EXIT_CONFIG,
        AppError::Mirror(MirrorError::LocalDirectory { .. }) => EXIT_LOCAL_DIRECTORY,
        AppError::Mirror(MirrorError::LocalFile { .. }) => EXIT_LOCAL_FILE,
        AppError::Mirror(MirrorError::Client(_)) => EXIT_COMMUNICATION,
    }
}

/// Write the single-line diagnostic for `err`, plus the underlying reason
/// when the error wraps one.
pub fn report_error(err: &AppError, out: &mut dyn Write) {
    match err {
        AppError::Mirror(MirrorError::Client(cause)) => {
            emit(out, format_args!("{}\n", err));
            emit(out, format_args!("Reason: {}\n", cause));
        }
        AppError::Mirror(MirrorError::LocalFile { path, source }) => {
            emit(out, format_args!("Error: {}\n", err));
            emit(out, format_args!("Reason: [{}] {}\n", path.display(), source));
        }
        AppError::Config(cause) => {
            emit(out, format_args!("{}\n", err));
            if let Some(inner) = cause.source() {
                emit(out, format_args!("Reason: {}\n", inner));
            }
        }
        _ => {
            emit(out, format_args!("{}\n", err));
        }
    }
}
