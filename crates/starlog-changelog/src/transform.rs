//! Deriving changelog entries from commit messages

use tracing::debug;

use starlog_commits::{transform_commit, NullExtractor, ParsedCommit};
use starlog_core::config::TaxonomyConfig;

use crate::types::{Category, ChangeLog, ChangeLogs};

/// Parse a commit message and derive its changelog entry
pub fn transform_changelog(
    message: &str,
    project_link: Option<&str>,
    taxonomy: &TaxonomyConfig,
) -> ChangeLog {
    let commit = transform_commit(message, &NullExtractor, taxonomy);
    changelog_from_commit(&commit, project_link)
}

/// Derive a changelog entry from an already-parsed commit
pub fn changelog_from_commit(commit: &ParsedCommit, project_link: Option<&str>) -> ChangeLog {
    let mut description = commit.description.clone();
    let mut refs = String::new();
    let mut footer_title = String::new();

    for footer in commit.footer.iter().flatten() {
        let footer_refs = footer_by_key(footer, "Refs");
        if !footer_refs.is_empty() {
            refs = footer_refs;
        }

        let title = footer_by_key(footer, "Title");
        if !title.is_empty() {
            footer_title = title;
        }
    }

    if refs.is_empty() {
        // No Refs footer: a trailing " #ref" in the description is the
        // reference, and the text before it is the title source
        let mut parts = description.split(" #");
        let head = parts.next().unwrap_or_default().to_string();
        if let Some(tail) = parts.next() {
            refs = format!("#{}", tail);
        }
        description = head;
    }

    let link = match project_link {
        Some(base) if !refs.is_empty() => format!("[{}]({}{})", refs, base, refs),
        _ => refs.clone(),
    };

    let title = if footer_title.is_empty() {
        description
    } else {
        footer_title
    };

    let category = if commit.category.contains("fix") {
        Category::Fixes
    } else if commit.category.contains("feat") {
        Category::Features
    } else {
        Category::Changes
    };

    debug!(%category, refs = %refs, "derived changelog entry");

    ChangeLog {
        category,
        refs,
        title,
        link,
    }
}

/// Derive changelog entries for a batch of messages, keyed by refs
pub fn transform_changelogs<S: AsRef<str>>(
    messages: &[S],
    project_link: Option<&str>,
    taxonomy: &TaxonomyConfig,
) -> ChangeLogs {
    let mut changelogs = ChangeLogs::new();

    for message in messages {
        let changelog = transform_changelog(message.as_ref(), project_link, taxonomy);
        changelogs.insert(changelog.refs.clone(), changelog);
    }

    changelogs
}

/// Extract a footer value by key, matching `"key #value"` then `"key: value"`
/// case-insensitively; the later form wins when both appear. The value is the
/// segment between the first and second delimiter.
fn footer_by_key(footer: &str, key: &str) -> String {
    let mut result = String::new();
    let footer_lower = footer.to_lowercase();
    let key_lower = key.to_lowercase();

    if footer_lower.contains(&format!("{} #", key_lower)) {
        result = footer.split('#').nth(1).unwrap_or_default().to_string();
    }
    if footer_lower.contains(&format!("{}: ", key_lower)) {
        result = footer.split(": ").nth(1).unwrap_or_default().to_string();
    }

    result
}
