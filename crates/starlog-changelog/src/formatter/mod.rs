//! Changelog formatting

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::ChangeLogs;

/// Trait for changelog formatters
pub trait ChangeLogFormatter: Send + Sync {
    /// Render a batch of changelog entries
    fn format(&self, changelogs: &ChangeLogs) -> String;

    /// File extension for this format
    fn extension(&self) -> &'static str;
}
