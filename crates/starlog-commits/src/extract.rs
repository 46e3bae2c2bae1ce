//! Issue extraction seam
//!
//! Issue-tracker syntax is not parsed here. Callers that know their tracker's
//! token format supply an extractor; everyone else gets [`NullExtractor`].

/// Extracts issue tokens from a commit header line.
///
/// Returns the extracted tokens and the header with those tokens stripped,
/// so the remainder can be parsed as a conventional-commit header.
pub trait IssueExtractor: Send + Sync {
    /// Extract issues from a header line
    fn extract(&self, header: &str) -> (Vec<String>, String);
}

/// Extractor that finds nothing and leaves the header untouched
pub struct NullExtractor;

impl IssueExtractor for NullExtractor {
    fn extract(&self, header: &str) -> (Vec<String>, String) {
        (Vec::new(), header.to_string())
    }
}

impl<F> IssueExtractor for F
where
    F: Fn(&str) -> (Vec<String>, String) + Send + Sync,
{
    fn extract(&self, header: &str) -> (Vec<String>, String) {
        self(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_extractor_passes_header_through() {
        let (issues, remainder) = NullExtractor.extract("feat: add thing");
        assert!(issues.is_empty());
        assert_eq!(remainder, "feat: add thing");
    }

    #[test]
    fn test_closure_as_extractor() {
        let extractor = |header: &str| {
            let stripped = header.replace("[JIRA-1]", "");
            (vec!["JIRA-1".to_string()], stripped.trim().to_string())
        };
        let (issues, remainder) = extractor.extract("[JIRA-1] feat: add thing");
        assert_eq!(issues, vec!["JIRA-1"]);
        assert_eq!(remainder, "feat: add thing");
    }
}
