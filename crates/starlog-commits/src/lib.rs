//! Starlog Commits - conventional commit parsing
//!
//! This crate turns free-text commit messages that loosely follow the
//! conventional-commits convention into structured [`ParsedCommit`] records:
//! category, scope, description, body, footers, and the semver impact
//! (major/minor/patch) derived from a caller-supplied taxonomy.
//!
//! Parsing is total: any input, however malformed, produces a record via the
//! fallback path. No I/O, no shared state; the compiled patterns are the only
//! shared resource and are safe for concurrent reuse.

mod extract;
mod transform;
mod types;

pub use extract::{IssueExtractor, NullExtractor};
pub use transform::{transform_commit, transform_commits};
pub use types::{Commits, ParsedCommit};
