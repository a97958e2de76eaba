//! Shared test utilities for E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_env_file(env_files::COMPLETE);
//!     fixture.command().args(["-p", "repo"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::env_files;
    pub use super::TestFixture;
}

/// Env file contents for testing.
#[allow(dead_code)]
pub mod env_files {
    /// All four keys, mixing quoting styles.
    pub const COMPLETE: &str = r#"# secure-git credentials
GITHUB_PERSONAL_USER=octocat
GITHUB_PERSONAL_TOKEN="ghp_personal"

GITHUB_WORK_USER="alice"
GITHUB_WORK_TOKEN='ghp_work'
"#;

    /// Personal token absent, work account complete.
    pub const MISSING_PERSONAL_TOKEN: &str = r#"GITHUB_PERSONAL_USER=octocat
GITHUB_WORK_USER=alice
GITHUB_WORK_TOKEN=ghp_work
"#;

    /// Work user absent, personal account complete.
    pub const MISSING_WORK_USER: &str = r#"GITHUB_PERSONAL_USER=octocat
GITHUB_PERSONAL_TOKEN=ghp_personal
GITHUB_WORK_TOKEN=ghp_work
"#;

    /// Complete, with noise lines that must be ignored.
    pub const WITH_NOISE: &str = r#"
# comment
FOO
   # indented comment
GITHUB_PERSONAL_USER = octocat
GITHUB_PERSONAL_TOKEN = ghp_old
GITHUB_PERSONAL_TOKEN = ghp_personal
GITHUB_WORK_USER=alice
GITHUB_WORK_TOKEN=ghp_work
"#;
}

/// A temporary working directory for running the binary.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.secure-git.env` file with the given content.
    pub fn with_env_file(self, content: &str) -> Self {
        self.temp_dir
            .child(".secure-git.env")
            .write_str(content)
            .expect("Failed to write env file");
        self
    }

    /// Path to the fixture directory.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured to run in this fixture's directory.
    ///
    /// `RUST_LOG` and color variables are cleared so stderr stays predictable.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("secure-git");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
