//! RAX FTP Mirror - Entry Point
//!
//! Downloads the files of one remote FTP directory into a local directory.

use log::info;
use std::io;
use std::process::ExitCode;

use rax_ftp_mirror::app;
use rax_ftp_mirror::utils::logging::setup_logging;

fn main() -> ExitCode {
    // RUST_LOG controls verbosity; progress itself goes to stdout
    setup_logging();

    info!("Launching FTP mirror...");

    let mut stdout = io::stdout().lock();
    ExitCode::from(app::run(std::env::args_os(), &mut stdout))
}
