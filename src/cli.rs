//! CLI argument parsing and command execution

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use secure_git::account::{self, AccountKind};
use secure_git::error::Error;
use secure_git::exit_codes;
use secure_git::output::OutputConfig;
use secure_git::{defaults, env_file, repo_name};

/// Print an authenticated GitHub clone URL for a work or personal account
#[derive(Parser, Debug)]
#[command(name = "secure-git")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
#[command(override_usage = "secure-git [-p|-w] <repository-name>")]
#[command(after_help = "Examples:\n  \
    secure-git -p Example\n  \
    secure-git -w MyRepo\n  \
    secure-git -w git@github.com:octocat/Hello-World.git\n\n\
    Credentials are read from .secure-git.env in the current directory,\n\
    or next to the secure-git executable.")]
pub struct Cli {
    /// Use personal account configuration
    #[arg(short = 'p', long)]
    personal: bool,

    /// Use work account configuration
    #[arg(short = 'w', long)]
    work: bool,

    /// Repository name or GitHub URL (HTTPS or SSH)
    #[arg(value_name = "REPOSITORY")]
    repositories: Vec<String>,

    /// Colorize diagnostics (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto", value_parser = ["always", "never", "auto"])]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Set up `env_logger`. `RUST_LOG` takes precedence over `--log-level`.
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_env_and_flag(&self.color)
    }

    /// The account selected by `-p` or `-w`.
    fn account_kind(&self) -> secure_git::error::Result<AccountKind> {
        match (self.personal, self.work) {
            (true, true) => Err(Error::usage("-p and -w flags are mutually exclusive")),
            (false, false) => Err(Error::usage("You must specify either -p or -w flag")),
            (true, false) => Ok(AccountKind::Personal),
            (false, true) => Ok(AccountKind::Work),
        }
    }

    /// The single positional repository argument.
    fn repository(&self) -> secure_git::error::Result<&str> {
        match self.repositories.as_slice() {
            [repository] => Ok(repository.as_str()),
            _ => Err(Error::usage(
                "You must provide exactly one repository name",
            )),
        }
    }

    /// Resolve the clone URL for the parsed arguments.
    pub fn resolve_url(&self) -> Result<String> {
        let kind = self.account_kind()?;
        let repo = repo_name::parse_repo_name(self.repository()?);
        debug!("Using {} account for repository {}", kind, repo);

        let env = env_file::load(&defaults::search_paths())?;
        let account = account::resolve(&env, kind)?;
        Ok(account.clone_url(repo))
    }

    /// Execute the command, printing the clone URL on success.
    pub fn execute(&self) -> Result<()> {
        let url = self.resolve_url()?;
        println!("{}", url);
        Ok(())
    }
}

/// Full help text, shown after usage errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Report an error from [`Cli::execute`] on stderr.
pub fn report(output: &OutputConfig, err: &anyhow::Error) {
    eprintln!("{}", output.error_line(&format!("{}", err)));
    if err.downcast_ref::<Error>().is_some_and(Error::is_usage) {
        eprintln!();
        eprint!("{}", usage());
    }
}

/// Handle an argument parser failure.
///
/// `--help` and `--version` exit successfully; anything else is a usage
/// failure.
pub fn exit_for_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::from(exit_codes::SUCCESS)
        }
        _ => {
            eprintln!("{}", parse_error_message(&err));
            eprintln!();
            eprint!("{}", usage());
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

/// The leading `error:` paragraph of a parser error, without clap's own
/// usage line and `--help` pointer.
fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .split("\n\n")
        .next()
        .unwrap_or_default()
        .trim_end()
        .to_string()
}
