//! # secure-git CLI
//!
//! This is the binary entry point for the `secure-git` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and diagnostic colors.
//! - Translating errors into a message on stderr and exit status 1.
//!
//! The core logic lives in the `secure_git` library crate.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use secure_git::exit_codes;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::exit_for_parse_error(err),
    };

    cli.init_logging();
    let output = cli.output_config();

    match cli.execute() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            cli::report(&output, &err);
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}
