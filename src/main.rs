//! Depscan: dependency analysis driven by a versioned module configuration.
//!
//! This is the main entry point for the `depscan` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod module;

use cli::Cli;
use std::error::Error as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            let mut cause = err.source();
            while let Some(inner) = cause {
                tracing::debug!("caused by: {}", inner);
                cause = inner.source();
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
