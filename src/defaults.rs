//! Default values for secure-git.
//!
//! This module centralizes the env file name and the process-derived search
//! locations so the rest of the crate can take them as explicit parameters.

use std::path::PathBuf;

use crate::env_file::SearchPaths;

/// Name of the credentials file.
pub const ENV_FILE_NAME: &str = ".secure-git.env";

/// Returns the search locations for the current process.
///
/// The working directory falls back to `.` when it cannot be determined; the
/// executable directory is `None` when the executable path is unknown.
pub fn search_paths() -> SearchPaths {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let executable_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    SearchPaths::new(working_dir, executable_dir)
}
