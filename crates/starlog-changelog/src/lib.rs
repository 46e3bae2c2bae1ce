//! Starlog Changelog - changelog entries derived from parsed commits
//!
//! Maps [`starlog_commits::ParsedCommit`] records into changelog entries
//! bucketed as Fixes / Features / Changes, with issue references pulled from
//! `Refs` footers (or the description) and formatted as links.

pub mod formatter;
mod transform;
mod types;

pub use formatter::{ChangeLogFormatter, MarkdownFormatter};
pub use transform::{changelog_from_commit, transform_changelog, transform_changelogs};
pub use types::{Category, ChangeLog, ChangeLogs};
