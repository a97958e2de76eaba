//! Property-based tests for repository name normalization.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::repo_name::parse_repo_name;
    use proptest::prelude::*;

    proptest! {
        /// Property: a bare name without separators or dots is returned unchanged
        #[test]
        fn bare_name_is_unchanged(name in "[A-Za-z0-9_-]{1,40}") {
            prop_assert_eq!(parse_repo_name(&name), name.as_str());
        }

        /// Property: the name is recovered from any HTTPS URL form
        #[test]
        fn https_url_yields_repo(
            owner in "[A-Za-z0-9_-]{1,20}",
            repo in "[A-Za-z0-9_-]{1,20}",
            scheme in prop::sample::select(vec!["", "http://", "https://"]),
            suffix in prop::sample::select(vec!["", ".git"]),
        ) {
            let url = format!("{scheme}github.com/{owner}/{repo}{suffix}");
            prop_assert_eq!(parse_repo_name(&url), repo.as_str());
        }

        /// Property: the name is recovered from any SSH URL form
        #[test]
        fn ssh_url_yields_repo(
            owner in "[A-Za-z0-9_-]{1,20}",
            repo in "[A-Za-z0-9_-]{1,20}",
            suffix in prop::sample::select(vec!["", ".git"]),
        ) {
            let url = format!("git@github.com:{owner}/{repo}{suffix}");
            prop_assert_eq!(parse_repo_name(&url), repo.as_str());
        }

        /// Property: the result never contains a slash when a URL matched
        #[test]
        fn result_is_input_or_slash_free(input in ".*") {
            let result = parse_repo_name(&input);
            prop_assert!(result == input || !result.contains('/'));
        }

        /// Property: normalization is idempotent
        #[test]
        fn normalization_is_idempotent(input in ".*") {
            let once = parse_repo_name(&input);
            prop_assert_eq!(parse_repo_name(once), once);
        }
    }
}
