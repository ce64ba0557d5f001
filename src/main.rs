//! vault-hooks: session hooks that persist a notes vault to git.
//!
//! This is the main entry point for the `vault-hooks` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and maps errors
//! to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod gate;
pub mod git;
pub mod hook;
pub mod locks;
mod logging;
pub mod session;
pub mod sync;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
