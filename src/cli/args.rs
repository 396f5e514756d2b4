//! Command line arguments
//!
//! Resolves the four mandatory options of a mirror job.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ParseError;
use crate::mirror::JobPaths;

pub const PROGRAM_NAME: &str = "rax-ftp-mirror";

const EXAMPLE: &str = "Example:\n rax-ftp-mirror \
    -s \"ftp.ebi.ac.uk\" \
    -r \"/pub/databases/opentargets/platform/latest/output/etl/json/\" \
    -l \"./data/\" \
    -d \"diseases\"";

/// Download files from a directory on an ftp server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = PROGRAM_NAME,
    about = "Download files from a directory on an ftp server",
    help_template = "{usage-heading} {usage}\n\n{about}\n\nOptions:\n{options}\n{after-help}",
    after_help = EXAMPLE
)]
pub struct CliArgs {
    /// remote ftp server uri
    #[arg(short = 's', long = "server", value_name = "ftp_address")]
    pub server: String,

    /// remote base directory
    #[arg(short = 'r', long = "remotedir", value_name = "remote_dir")]
    pub remote_base: PathBuf,

    /// local base directory
    #[arg(short = 'l', long = "localdir", value_name = "local_dir")]
    pub local_base: PathBuf,

    /// directory to download files from (relative to remotedir) and to (relative to localdir)
    #[arg(short = 'd', long = "dir", value_name = "dir")]
    pub dir: PathBuf,
}

impl CliArgs {
    /// Resolves `args` (program name first, as in `std::env::args_os`).
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(to_parse_error)
    }

    pub fn job_paths(&self) -> JobPaths {
        JobPaths::new(
            self.server.clone(),
            self.remote_base.clone(),
            self.local_base.clone(),
            self.dir.clone(),
        )
    }

    /// Usage text, starting with the `Usage:` banner
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }

    /// The parameters a job is about to run with, one per line
    pub fn report(&self) -> String {
        format!(
            "\tServer: [{}]\n\tRemote: [{}]\n\tLocal:  [{}]\n\tDir:    [{}]\n",
            self.server,
            self.remote_base.display(),
            self.local_base.display(),
            self.dir.display()
        )
    }
}

fn to_parse_error(err: clap::Error) -> ParseError {
    let invalid = err.get(ContextKind::InvalidArg);
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseError::HelpRequested,
        ErrorKind::MissingRequiredArgument => match invalid {
            Some(ContextValue::Strings(names)) => ParseError::MissingOptions(
                names.iter().map(|name| option_name(name)).collect(),
            ),
            Some(ContextValue::String(name)) => {
                ParseError::MissingOptions(vec![option_name(name)])
            }
            _ => ParseError::MissingOptions(Vec::new()),
        },
        ErrorKind::UnknownArgument => match invalid {
            Some(ContextValue::String(flag)) => ParseError::UnrecognizedOption(flag.clone()),
            _ => ParseError::UnrecognizedOption(first_line(&err)),
        },
        _ => ParseError::Invalid(first_line(&err)),
    }
}

/// `--server <ftp_address>` -> `--server`
fn option_name(rendered: &str) -> String {
    rendered
        .split_whitespace()
        .next()
        .unwrap_or(rendered)
        .to_string()
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
