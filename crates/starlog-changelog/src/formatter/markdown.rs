//! Markdown changelog formatter

use tracing::debug;

use super::ChangeLogFormatter;
use crate::types::{Category, ChangeLog, ChangeLogs};

/// Markdown changelog formatter
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn section(&self, output: &mut String, title: Category, entries: &[&ChangeLog]) {
        if entries.is_empty() {
            return;
        }

        output.push_str(&format!("### {}\n\n", title));

        for entry in entries {
            output.push_str(&format!("- {}", entry.title));
            if !entry.link.is_empty() {
                output.push_str(&format!(" ({})", entry.link));
            }
            output.push('\n');
        }

        output.push('\n');
    }
}

impl ChangeLogFormatter for MarkdownFormatter {
    fn format(&self, changelogs: &ChangeLogs) -> String {
        let mut output = String::new();

        for category in [Category::Features, Category::Fixes, Category::Changes] {
            let mut entries: Vec<&ChangeLog> = changelogs
                .values()
                .filter(|entry| entry.category == category)
                .collect();
            // HashMap iteration order is arbitrary; sort for stable output
            entries.sort_by(|a, b| a.refs.cmp(&b.refs));

            self.section(&mut output, category, &entries);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
