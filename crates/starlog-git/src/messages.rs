//! Raw message assembly for the parser
//!
//! The parser consumes plain strings of the form
//! `subject + " #" + commitsURL + shortHash + "\n\n" + body`, so the commit
//! hash travels through the description as a reference the changelog
//! derivation can pick up.

use crate::types::CommitInfo;

/// Build the raw message string for a single commit
pub fn raw_message(commit: &CommitInfo, commits_url: &str) -> String {
    let hash_ref = if commit.short_hash.is_empty() {
        String::new()
    } else {
        format!(" #{}{}", commits_url, commit.short_hash)
    };

    format!(
        "{}{}\n\n{}",
        commit.subject,
        hash_ref,
        commit.body.as_deref().unwrap_or_default()
    )
}

/// Build raw message strings for a batch of commits
pub fn raw_messages(commits: &[CommitInfo], commits_url: &str) -> Vec<String> {
    commits
        .iter()
        .map(|commit| raw_message(commit, commits_url))
        .collect()
}
