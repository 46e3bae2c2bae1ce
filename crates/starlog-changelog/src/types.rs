//! Changelog types

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Changelog bucket for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Bug fixes (category contains "fix")
    Fixes,
    /// New features (category contains "feat")
    Features,
    /// Everything else
    Changes,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fixes => "Fixes",
            Self::Features => "Features",
            Self::Changes => "Changes",
        };
        f.write_str(name)
    }
}

/// A single changelog entry derived from one commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLog {
    /// Bucket the entry belongs to
    pub category: Category,
    /// Issue/PR reference, possibly empty
    pub refs: String,
    /// Entry title: the description, unless a `Title:` footer overrides it
    pub title: String,
    /// `refs` formatted as a markdown link when a project link is configured,
    /// otherwise `refs` verbatim
    pub link: String,
}

/// A batch of changelog entries keyed by refs; a later entry with the same
/// refs replaces the earlier one
pub type ChangeLogs = HashMap<String, ChangeLog>;
