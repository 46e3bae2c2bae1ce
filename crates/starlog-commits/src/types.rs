//! Parsed commit records

use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};

/// A parsed conventional commit message.
///
/// Field order matters: the canonical JSON rendering emits keys in
/// declaration order. An empty footer is always `None`, never `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Issue tokens extracted from the header line
    pub issues: Vec<String>,
    /// Commit type token (e.g. "feat", "fix"); the configured fallback
    /// category when the header did not parse
    pub category: String,
    /// Parenthesized scope qualifier, empty when absent
    pub scope: String,
    /// Single-line summary from the header
    pub description: String,
    /// Free text between header and footer, trimmed
    pub body: String,
    /// Logical footer entries, each a complete "Key: value" or "Key #value"
    /// entry with continuation lines folded in
    pub footer: Option<Vec<String>>,
    /// Breaking change: `!` marker, major-forcing category, or a
    /// BREAKING CHANGE footer
    pub major: bool,
    /// Category is in the minor taxonomy
    pub minor: bool,
    /// Category is in the patch taxonomy
    pub patch: bool,
}

impl ParsedCommit {
    /// Render with an injected serialization strategy.
    ///
    /// On encoder failure the error's message becomes the result string, so
    /// display and logging callers never need an error path of their own.
    pub fn render_with<F>(&self, serialize: F) -> String
    where
        F: FnOnce(&Self) -> serde_json::Result<String>,
    {
        match serialize(self) {
            Ok(rendered) => rendered,
            Err(err) => err.to_string(),
        }
    }
}

impl fmt::Display for ParsedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|commit| serde_json::to_string(commit)))
    }
}

/// A batch of parsed commits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commits(pub Vec<ParsedCommit>);

impl Commits {
    /// Check if any commit in the batch is a breaking change
    pub fn is_major(&self) -> bool {
        self.0.iter().any(|c| c.major)
    }

    /// Check if any commit in the batch is minor
    pub fn is_minor(&self) -> bool {
        self.0.iter().any(|c| c.minor)
    }

    /// Check if any commit in the batch is patch-worthy
    pub fn is_patch(&self) -> bool {
        self.0.iter().any(|c| c.patch)
    }

    /// Compute the next version implied by the batch.
    ///
    /// Major wins over minor wins over patch; a batch with no classified
    /// commits leaves the version unchanged.
    pub fn bump(&self, current: &Version) -> Version {
        if self.is_major() {
            Version::new(current.major + 1, 0, 0)
        } else if self.is_minor() {
            Version::new(current.major, current.minor + 1, 0)
        } else if self.is_patch() {
            Version::new(current.major, current.minor, current.patch + 1)
        } else {
            current.clone()
        }
    }

    /// Number of commits in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the commits
    pub fn iter(&self) -> std::slice::Iter<'_, ParsedCommit> {
        self.0.iter()
    }
}

impl From<Vec<ParsedCommit>> for Commits {
    fn from(commits: Vec<ParsedCommit>) -> Self {
        Self(commits)
    }
}

impl IntoIterator for Commits {
    type Item = ParsedCommit;
    type IntoIter = std::vec::IntoIter<ParsedCommit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rendering_of_empty_record() {
        let commit = ParsedCommit::default();
        assert_eq!(
            commit.to_string(),
            r#"{"issues":[],"category":"","scope":"","description":"","body":"","footer":null,"major":false,"minor":false,"patch":false}"#
        );
    }

    #[test]
    fn test_absent_footer_serializes_as_null() {
        let commit = ParsedCommit {
            category: "feat".to_string(),
            description: "add thing".to_string(),
            ..Default::default()
        };
        let json = commit.to_string();
        assert!(json.contains(r#""footer":null"#));
    }

    #[test]
    fn test_render_with_surfaces_encoder_error() {
        use serde::ser::Error as _;
        let commit = ParsedCommit::default();
        let rendered =
            commit.render_with(|_| Err(serde_json::Error::custom("dummy error")));
        assert_eq!(rendered, "dummy error");
    }

    #[test]
    fn test_roundtrip_through_canonical_form() {
        let commit = ParsedCommit {
            issues: vec!["GCC-1".to_string()],
            category: "feat".to_string(),
            scope: "parser".to_string(),
            description: "add thing".to_string(),
            body: "details".to_string(),
            footer: Some(vec!["Refs #42".to_string()]),
            minor: true,
            ..Default::default()
        };
        let reparsed: ParsedCommit = serde_json::from_str(&commit.to_string()).unwrap();
        assert_eq!(reparsed, commit);
    }

    #[test]
    fn test_batch_impact() {
        let minor = ParsedCommit {
            minor: true,
            ..Default::default()
        };
        let patch = ParsedCommit {
            patch: true,
            ..Default::default()
        };
        let commits = Commits(vec![minor, patch]);

        assert!(!commits.is_major());
        assert!(commits.is_minor());
        assert!(commits.is_patch());
        assert_eq!(commits.bump(&Version::new(1, 2, 3)), Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_unclassified_batch_is_identity() {
        let commits = Commits(vec![ParsedCommit::default()]);
        assert_eq!(commits.bump(&Version::new(0, 1, 0)), Version::new(0, 1, 0));
    }
}
