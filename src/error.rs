//! # Error Handling
//!
//! This module defines the centralized error type for `secure-git`. It uses
//! `thiserror` to describe each failure the tool can report:
//!
//! - **Usage errors**: bad flag combinations or the wrong number of
//!   repository arguments.
//! - **Env file errors**: the `.secure-git.env` file could not be opened or
//!   read as UTF-8 text.
//! - **Missing account errors**: one of the two accounts lacks its username
//!   or token key.
//!
//! Every variant is terminal. The binary reports it once on stderr and exits
//! with [`crate::exit_codes::FAILURE`].

use std::path::PathBuf;

use thiserror::Error;

use crate::account::AccountKind;
use crate::defaults::ENV_FILE_NAME;

/// Main error type for secure-git operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command line was well-formed for the parser but violates the
    /// tool's usage rules.
    #[error("{message}")]
    Usage { message: String },

    /// The env file could not be opened or read.
    #[error(
        "Failed to load {} file ({}): {source}\n  hint: make sure {} defines {}",
        ENV_FILE_NAME,
        path.display(),
        ENV_FILE_NAME,
        AccountKind::required_keys().join(", ")
    )]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The username or token key for an account is absent.
    #[error(
        "Missing {kind} account configuration: {} and {} required",
        kind.user_key(),
        kind.token_key()
    )]
    MissingAccount { kind: AccountKind },
}

impl Error {
    /// Build a usage error from any message.
    pub fn usage(message: impl Into<String>) -> Self {
        Error::Usage {
            message: message.into(),
        }
    }

    /// Whether the binary should follow this error with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
