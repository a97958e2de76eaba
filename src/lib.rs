//! # secure-git
//!
//! Turns a repository name, or a GitHub URL, into an authenticated HTTPS
//! clone URL for one of two stored accounts.
//!
//! ## Quick Example
//!
//! ```
//! use secure_git::account::{self, AccountKind};
//! use secure_git::{env_file, repo_name};
//!
//! let env = env_file::parse(
//!     "GITHUB_PERSONAL_USER=octocat\n\
//!      GITHUB_PERSONAL_TOKEN=ghp_personal\n\
//!      GITHUB_WORK_USER=\"alice\"\n\
//!      GITHUB_WORK_TOKEN='ghp_work'\n",
//! );
//!
//! let account = account::resolve(&env, AccountKind::Work).unwrap();
//! let repo = repo_name::parse_repo_name("git@github.com:octocat/Hello-World.git");
//! assert_eq!(
//!     account.clone_url(repo),
//!     "https://ghp_work@github.com/alice/Hello-World.git"
//! );
//! ```
//!
//! ## Modules
//!
//! - **`env_file`**: locates and parses the `.secure-git.env` credentials file.
//! - **`account`**: validates both stored accounts and selects one.
//! - **`repo_name`**: reduces GitHub URLs to a bare repository name.
//! - **`output`**: color handling for diagnostics.
//! - **`error`**: the crate's error type.

pub mod account;
pub mod defaults;
pub mod env_file;
pub mod error;
pub mod output;
pub mod repo_name;

#[cfg(test)]
mod repo_name_proptest;

/// Process exit codes.
pub mod exit_codes {
    /// The clone URL was printed.
    pub const SUCCESS: u8 = 0;
    /// Any usage, env file, or account error.
    pub const FAILURE: u8 = 1;
}
