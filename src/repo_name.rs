//! Repository name normalization.
//!
//! Accepts either a bare repository name or a GitHub URL in HTTPS or SSH
//! form and returns the bare name.

use std::sync::LazyLock;

use regex::Regex;

/// `[http(s)://][user@]github.com/<owner>/<repo>[.suffix]`
///
/// The host must start the input or follow `://` or `@`.
static HTTPS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|://|@)github\.com/[^/]+/([^/.]+)(?:\.[^/]*)?$")
        .expect("HTTPS pattern is valid")
});

/// `[ssh://]git@github.com:<owner>/<repo>[.suffix]`
static SSH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|://)git@github\.com:[^/]+/([^/.]+)(?:\.[^/]*)?$")
        .expect("SSH pattern is valid")
});

/// Extract the repository name from a GitHub URL.
///
/// The name ends at the first `.`, so `.git` and any other suffix are
/// dropped. Input matching neither URL form is returned unchanged.
///
/// ```
/// use secure_git::repo_name::parse_repo_name;
///
/// assert_eq!(parse_repo_name("https://github.com/octocat/Hello-World.git"), "Hello-World");
/// assert_eq!(parse_repo_name("git@github.com:octocat/Hello-World.git"), "Hello-World");
/// assert_eq!(parse_repo_name("Hello-World"), "Hello-World");
/// ```
pub fn parse_repo_name(input: &str) -> &str {
    [&*HTTPS_PATTERN, &*SSH_PATTERN]
        .into_iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1))
        .map_or(input, |name| name.as_str())
}
