//! # Accounts
//!
//! Credential records and account selection. The env file must define both a
//! personal and a work account; [`resolve`] checks both and hands back only
//! the one the caller selected.

use std::fmt;

use log::debug;

use crate::env_file::EnvMap;
use crate::error::{Error, Result};

/// Which stored account to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// `GITHUB_WORK_USER` / `GITHUB_WORK_TOKEN`
    Work,
    /// `GITHUB_PERSONAL_USER` / `GITHUB_PERSONAL_TOKEN`
    Personal,
}

impl AccountKind {
    /// Env key holding the account's GitHub username.
    pub fn user_key(self) -> &'static str {
        match self {
            AccountKind::Work => "GITHUB_WORK_USER",
            AccountKind::Personal => "GITHUB_PERSONAL_USER",
        }
    }

    /// Env key holding the account's access token.
    pub fn token_key(self) -> &'static str {
        match self {
            AccountKind::Work => "GITHUB_WORK_TOKEN",
            AccountKind::Personal => "GITHUB_PERSONAL_TOKEN",
        }
    }

    /// Every key the env file has to define.
    pub fn required_keys() -> Vec<&'static str> {
        let mut keys = Vec::with_capacity(4);
        for kind in [AccountKind::Work, AccountKind::Personal] {
            keys.push(kind.user_key());
            keys.push(kind.token_key());
        }
        keys
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Work => write!(f, "work"),
            AccountKind::Personal => write!(f, "personal"),
        }
    }
}

/// A GitHub username and the token used to authenticate as it.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    kind: AccountKind,
    username: String,
    token: String,
}

impl Account {
    /// Create an account from its parts.
    pub fn new(kind: AccountKind, username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            kind,
            username: username.into(),
            token: token.into(),
        }
    }

    /// Read the account's username and token from a loaded env map.
    ///
    /// Both keys must be present. Empty values are accepted; no format checks
    /// are applied to either.
    pub fn from_env(env: &EnvMap, kind: AccountKind) -> Result<Self> {
        match (env.get(kind.user_key()), env.get(kind.token_key())) {
            (Some(username), Some(token)) => Ok(Self::new(kind, username, token)),
            _ => Err(Error::MissingAccount { kind }),
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Format the authenticated HTTPS clone URL for `repo`.
    ///
    /// ```
    /// use secure_git::account::{Account, AccountKind};
    ///
    /// let account = Account::new(AccountKind::Work, "alice", "ghp_123");
    /// assert_eq!(
    ///     account.clone_url("Hello-World"),
    ///     "https://ghp_123@github.com/alice/Hello-World.git"
    /// );
    /// ```
    pub fn clone_url(&self, repo: &str) -> String {
        format!(
            "https://{}@github.com/{}/{}.git",
            self.token, self.username, repo
        )
    }
}

// Tokens stay out of logs and panic messages.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("kind", &self.kind)
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Validate both accounts and return the selected one.
///
/// The personal account is checked first, then the work account. Either one
/// being incomplete is an error even when the other was selected.
pub fn resolve(env: &EnvMap, selected: AccountKind) -> Result<Account> {
    let personal = Account::from_env(env, AccountKind::Personal)?;
    let work = Account::from_env(env, AccountKind::Work)?;
    debug!(
        "Loaded personal account {} and work account {}",
        personal.username(),
        work.username()
    );

    Ok(match selected {
        AccountKind::Personal => personal,
        AccountKind::Work => work,
    })
}
