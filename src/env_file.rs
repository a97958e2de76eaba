//! # Env File Loading
//!
//! Reads the flat `KEY=VALUE` credentials file used by `secure-git`.
//!
//! ## Format
//!
//! - One entry per line, split on the first `=`. Key and value are trimmed.
//! - Blank lines and lines starting with `#` are ignored.
//! - Lines without `=` are skipped.
//! - One layer of matching single or double quotes around a value is removed.
//! - When a key repeats, the last value wins.
//!
//! ## Location
//!
//! [`locate`] looks for [`ENV_FILE_NAME`] in the working directory first,
//! then next to the running executable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::defaults::ENV_FILE_NAME;
use crate::error::{Error, Result};

/// Key/value pairs loaded from an env file.
pub type EnvMap = HashMap<String, String>;

/// Directories searched for the env file, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    /// Checked first.
    pub working_dir: PathBuf,
    /// Fallback when the working directory has no env file. `None` when the
    /// executable location is unknown.
    pub executable_dir: Option<PathBuf>,
}

impl SearchPaths {
    pub fn new(working_dir: impl Into<PathBuf>, executable_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            executable_dir,
        }
    }
}

/// Parse env file content into a map.
///
/// ```
/// use secure_git::env_file::parse;
///
/// let env = parse("# accounts\nGITHUB_WORK_USER=\"alice\"\n\nFOO\n");
/// assert_eq!(env.get("GITHUB_WORK_USER").map(String::as_str), Some("alice"));
/// assert_eq!(env.len(), 1);
/// ```
pub fn parse(content: &str) -> EnvMap {
    let mut env = EnvMap::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            debug!("Skipping line {} without '='", index + 1);
            continue;
        };

        env.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    env
}

/// Strip one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Read and parse the env file at `path`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EnvMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    let env = parse(&content);
    debug!("Loaded {} entries from {}", env.len(), path.display());
    Ok(env)
}

/// Pick the env file to load.
///
/// Returns the working directory candidate when it exists or when there is
/// no executable directory to fall back to, so a missing file is reported
/// against the first search location.
pub fn locate(search: &SearchPaths) -> PathBuf {
    let local = search.working_dir.join(ENV_FILE_NAME);
    // Only a definite "not found" triggers the fallback.
    if !matches!(local.try_exists(), Ok(false)) {
        return local;
    }

    match &search.executable_dir {
        Some(dir) => {
            let fallback = dir.join(ENV_FILE_NAME);
            debug!(
                "{} not found, falling back to {}",
                local.display(),
                fallback.display()
            );
            fallback
        }
        None => local,
    }
}

/// Locate and load the env file.
pub fn load(search: &SearchPaths) -> Result<EnvMap> {
    from_file(locate(search))
}
