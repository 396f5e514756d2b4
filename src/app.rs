//! Application flow
//!
//! Parse, report, prepare the local directory, run the job, and turn any
//! failure into one diagnostic and an exit status.

use log::info;
use std::ffi::OsString;
use std::io::Write;

use crate::cli::CliArgs;
use crate::client::ConnectionTarget;
use crate::config::MirrorConfig;
use crate::error::handlers::{EXIT_SUCCESS, error_to_exit_code, handle_error, report_error};
use crate::error::{AppError, ParseError};
use crate::mirror::{MirrorJob, MirrorReport, prepare_local_dir};
use crate::protocol::{FtpSession, SuppaSession};
use crate::utils::output::emit;

/// Runs the utility with configuration from `config.toml`/environment and
/// real FTP sessions. Returns the process exit status.
///
/// Arguments are resolved before any configuration is read, so `--help`
/// and usage errors never depend on the working directory.
pub fn run<I, T>(args: I, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = CliArgs::parse_from_args(args)
        .map_err(AppError::from)
        .and_then(|cli| {
            let config = MirrorConfig::load()?;
            execute(cli, &config, out, SuppaSession::new)
        });
    finish(result, out)
}

/// Runs the utility with an explicit configuration and session factory.
///
/// `new_session` is only called once the local directory exists.
pub fn run_with<I, T, S, F>(args: I, config: &MirrorConfig, out: &mut dyn Write, new_session: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: FtpSession,
    F: FnOnce() -> S,
{
    let result = CliArgs::parse_from_args(args)
        .map_err(AppError::from)
        .and_then(|cli| execute(cli, config, out, new_session));
    finish(result, out)
}

fn execute<S, F>(
    cli: CliArgs,
    config: &MirrorConfig,
    out: &mut dyn Write,
    new_session: F,
) -> Result<MirrorReport, AppError>
where
    S: FtpSession,
    F: FnOnce() -> S,
{
    emit(out, format_args!("\n"));
    emit(out, format_args!("Proceeding with the following parameters\n"));
    emit(out, format_args!("{}", cli.report()));

    let paths = cli.job_paths();
    prepare_local_dir(paths.full_local_path())?;

    emit(out, format_args!("\n"));

    let target = ConnectionTarget::from_server(paths.server(), config);
    info!("Target {}:{}", target.host(), target.port());

    let job = MirrorJob::new(target, paths);
    Ok(job.run(new_session(), out)?)
}

fn finish(result: Result<MirrorReport, AppError>, out: &mut dyn Write) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(AppError::Parse(ParseError::HelpRequested)) => {
            emit(out, format_args!("{}", CliArgs::help_text()));
            EXIT_SUCCESS
        }
        Err(err) => {
            handle_error(&err);
            report_error(&err, out);
            if matches!(err, AppError::Parse(_)) {
                emit(out, format_args!("\n"));
                emit(out, format_args!("{}", CliArgs::help_text()));
            }
            error_to_exit_code(&err)
        }
    }
}
