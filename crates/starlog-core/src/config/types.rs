//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category taxonomy driving version impact
    pub taxonomy: TaxonomyConfig,

    /// Changelog settings
    pub changelog: ChangelogConfig,

    /// Git settings
    pub git: GitConfig,
}

/// Category taxonomy: which commit types map to which semver impact.
///
/// A category in `major` always forces a breaking-change classification,
/// even without a `!` marker or `BREAKING CHANGE` footer. The `minor` and
/// `patch` lists are scanned in order, first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Categories that always force a major bump
    pub major: Vec<String>,

    /// Categories that map to a minor bump
    pub minor: Vec<String>,

    /// Categories that map to a patch bump
    pub patch: Vec<String>,

    /// Category assigned to messages that do not parse as conventional commits
    pub fallback_category: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            major: Vec::new(),
            minor: vec!["feat".to_string()],
            patch: vec!["fix".to_string(), "perf".to_string()],
            fallback_category: "chore".to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Base URL for issue/PR reference links, e.g. "https://tracker/browse/"
    pub project_link: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            project_link: None,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Base URL prepended to short hashes when building raw messages
    pub commits_url: Option<String>,

    /// Substring filter applied to tag names when looking up the latest tag
    pub tag_pattern: Option<String>,
}
