//! Message segmentation and classification

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use starlog_core::config::TaxonomyConfig;

use crate::extract::{IssueExtractor, NullExtractor};
use crate::types::{Commits, ParsedCommit};

/// Header pattern: `<category>[(<scope>)][!]: <description>` followed by the
/// rest of the message. The category is any run of characters excluding
/// `(`, `!`, `:`, so it may span lines when the first `: ` appears later in
/// the message.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)^(?:(?P<category>[^(!:]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<description>[^\n\r]+))(?P<remainder>.*)",
    )
    .expect("invalid header regex")
});

/// Splits the remainder into body and footer block. The body is matched
/// lazily and the footer greedily, so the body consumes as little as possible
/// and the footer claims the longest trailing run of footer-shaped text.
static BODY_FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(?P<body>.*?)(?P<footer>(?:[\w-]+(?:: | #).*|BREAKING CHANGE:.*)+)")
        .expect("invalid body/footer regex")
});

/// Recognizes a physical line that starts a new logical footer entry
static FOOTER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[\w-]+(?:: | #)|BREAKING CHANGE:)").expect("invalid footer line regex")
});

/// Parse a raw commit message into a structured record.
///
/// The header line is passed through `extractor` first; the stripped
/// remainder is then matched against the conventional-commit header pattern.
/// Messages that do not match fall back to the taxonomy's fallback category
/// with the whole first line as description. Parsing is total and never
/// fails.
pub fn transform_commit(
    message: &str,
    extractor: &dyn IssueExtractor,
    taxonomy: &TaxonomyConfig,
) -> ParsedCommit {
    let (header, rest) = message.split_once('\n').unwrap_or((message, ""));
    let (issues, header_remainder) = extractor.extract(header);

    let joined = format!("{}\n{}", header_remainder, rest);

    let Some(caps) = HEADER_RE.captures(&joined) else {
        debug!(header = %header_remainder, "message did not match header pattern, using fallback");
        return ParsedCommit {
            issues,
            category: taxonomy.fallback_category.clone(),
            description: header_remainder,
            body: rest.trim().to_string(),
            major: rest.contains("BREAKING CHANGE"),
            ..Default::default()
        };
    };

    let category = group(&caps, "category");
    let scope = group(&caps, "scope");
    let description = group(&caps, "description");
    let remainder = group(&caps, "remainder");

    let (body, footer_block) = match BODY_FOOTER_RE.captures(&remainder) {
        Some(caps) => (group(&caps, "body"), group(&caps, "footer")),
        None => (remainder.clone(), String::new()),
    };

    let marker = caps.name("breaking").is_some()
        || taxonomy.major.iter().any(|major| *major == category);

    let mut commit = ParsedCommit {
        issues,
        category,
        scope,
        description,
        body,
        footer: assemble_footers(&footer_block),
        // Rule (c): the unsplit footer block is checked for the literal
        // marker, case-sensitively
        major: marker || footer_block.contains("BREAKING CHANGE"),
        minor: false,
        patch: false,
    };

    if commit.major {
        return commit;
    }

    if taxonomy.minor.iter().any(|minor| *minor == commit.category) {
        commit.minor = true;
        return commit;
    }

    if taxonomy.patch.iter().any(|patch| *patch == commit.category) {
        commit.patch = true;
        return commit;
    }

    commit
}

/// Parse a batch of messages with the null issue extractor
pub fn transform_commits<S: AsRef<str>>(messages: &[S], taxonomy: &TaxonomyConfig) -> Commits {
    let commits = messages
        .iter()
        .map(|message| transform_commit(message.as_ref(), &NullExtractor, taxonomy))
        .collect();
    Commits(commits)
}

/// Reassemble the raw footer block into logical entries.
///
/// A line that does not look like a footer-entry start is folded into the
/// most recently started entry, so multi-line footer values stay attached to
/// their key. Entries that trim to empty are dropped; an empty result is
/// `None`, never an empty vec.
fn assemble_footers(block: &str) -> Option<Vec<String>> {
    let mut footers: Vec<String> = Vec::new();

    for line in block.split('\n') {
        if !FOOTER_LINE_RE.is_match(line) {
            if let Some(last) = footers.last_mut() {
                last.push('\n');
                last.push_str(line);
                continue;
            }
        }
        footers.push(line.to_string());
    }

    let footers: Vec<String> = footers
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect();

    if footers.is_empty() {
        None
    } else {
        Some(footers)
    }
}

/// Fetch a named group, trimmed; absent groups become empty strings
fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map_or("", |m| m.as_str())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> TaxonomyConfig {
        TaxonomyConfig::default()
    }

    fn parse(message: &str) -> ParsedCommit {
        transform_commit(message, &NullExtractor, &taxonomy())
    }

    #[test]
    fn test_category_and_description() {
        let commit = parse("feat: added a new feature");
        assert_eq!(commit.category, "feat");
        assert_eq!(commit.description, "added a new feature");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.body, "");
        assert_eq!(commit.footer, None);
    }

    #[test]
    fn test_scope() {
        let commit = parse("fix(parser): handle edge case");
        assert_eq!(commit.category, "fix");
        assert_eq!(commit.scope, "parser");
        assert_eq!(commit.description, "handle edge case");
    }

    #[test]
    fn test_breaking_marker_sets_major() {
        let commit = parse("feat!: added a new feature");
        assert!(commit.major);
        assert!(!commit.minor);
        assert!(!commit.patch);
    }

    #[test]
    fn test_breaking_marker_with_scope() {
        let commit = parse("refactor(core)!: rework internals");
        assert_eq!(commit.category, "refactor");
        assert_eq!(commit.scope, "core");
        assert!(commit.major);
    }

    #[test]
    fn test_minor_category() {
        let commit = parse("feat: added a new feature");
        assert!(commit.minor);
        assert!(!commit.major);
        assert!(!commit.patch);
    }

    #[test]
    fn test_patch_category() {
        let commit = parse("fix: fixed the problem");
        assert!(commit.patch);
        assert!(!commit.major);
        assert!(!commit.minor);
    }

    #[test]
    fn test_unclassified_category() {
        let commit = parse("docs: describe the thing");
        assert!(!commit.major);
        assert!(!commit.minor);
        assert!(!commit.patch);
    }

    #[test]
    fn test_major_forcing_category() {
        let mut taxonomy = taxonomy();
        taxonomy.major.push("remove".to_string());
        let commit = transform_commit("remove: drop old API", &NullExtractor, &taxonomy);
        assert!(commit.major);
        assert!(!commit.minor);
    }

    #[test]
    fn test_at_most_one_impact_flag() {
        for message in [
            "feat!: x",
            "feat: x",
            "fix: x",
            "docs: x",
            "not conventional at all",
        ] {
            let commit = parse(message);
            let set = [commit.major, commit.minor, commit.patch]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert!(set <= 1, "{:?} set {} flags", message, set);
        }
    }

    #[test]
    fn test_footer_extraction() {
        let commit = parse("feat: x\n\nbody text\n\nRefs #123\n");
        assert_eq!(commit.body, "body text");
        assert_eq!(commit.footer, Some(vec!["Refs #123".to_string()]));
    }

    #[test]
    fn test_footer_only_no_body() {
        let commit = parse("feat: added a new feature\n\nRefs #GCC-123\n");
        assert_eq!(commit.body, "");
        assert_eq!(commit.footer, Some(vec!["Refs #GCC-123".to_string()]));
    }

    #[test]
    fn test_multi_paragraph_body() {
        let commit = parse(
            "feat: added a new feature\n\nDescription of the new feature\nmore details\n\nRefs #GCC-123\n",
        );
        assert_eq!(commit.body, "Description of the new feature\nmore details");
        assert_eq!(commit.footer, Some(vec!["Refs #GCC-123".to_string()]));
    }

    #[test]
    fn test_multi_line_footer_continuation() {
        let commit = parse("feat: x\n\nNotes: see\nlink above\n");
        assert_eq!(
            commit.footer,
            Some(vec!["Notes: see\nlink above".to_string()])
        );
    }

    #[test]
    fn test_multiple_footers() {
        let commit = parse("feat: x\n\nRefs: #123\nReviewed-by: someone\n");
        assert_eq!(
            commit.footer,
            Some(vec![
                "Refs: #123".to_string(),
                "Reviewed-by: someone".to_string()
            ])
        );
    }

    #[test]
    fn test_breaking_change_footer_sets_major() {
        let commit = parse("feat: x\n\nBREAKING CHANGE: everything is different\n");
        assert!(commit.major);
        assert!(!commit.minor);
    }

    #[test]
    fn test_fallback_path() {
        let commit = parse("update all the things");
        assert_eq!(commit.category, "chore");
        assert_eq!(commit.description, "update all the things");
        assert_eq!(commit.footer, None);
        assert!(!commit.major);
    }

    #[test]
    fn test_fallback_with_breaking_change_marker() {
        let commit = parse("update all the things\n\nthis is a BREAKING CHANGE for sure");
        assert_eq!(commit.category, "chore");
        assert!(commit.major);
        assert_eq!(commit.body, "this is a BREAKING CHANGE for sure");
    }

    #[test]
    fn test_fallback_category_is_configurable() {
        let mut taxonomy = taxonomy();
        taxonomy.fallback_category = "misc".to_string();
        let commit = transform_commit("update all the things", &NullExtractor, &taxonomy);
        assert_eq!(commit.category, "misc");
    }

    #[test]
    fn test_empty_footer_normalizes_to_none() {
        let commit = parse("feat: x\n\njust a body\n");
        assert_eq!(commit.footer, None);
        assert_eq!(commit.body, "just a body");
    }

    #[test]
    fn test_issue_extractor_is_applied() {
        let extractor = |header: &str| {
            let stripped = header.replace(" [GCC-7]", "");
            (vec!["GCC-7".to_string()], stripped)
        };
        let commit = transform_commit("feat: add thing [GCC-7]", &extractor, &taxonomy());
        assert_eq!(commit.issues, vec!["GCC-7"]);
        assert_eq!(commit.description, "add thing");
    }

    #[test]
    fn test_batch_transform() {
        let messages = vec![
            "feat: added a new feature\n\nDescription of the new feature\nmore details\n\nRefs #GCC-123\n".to_string(),
        ];
        let commits = transform_commits(&messages, &taxonomy());

        let expected = ParsedCommit {
            category: "feat".to_string(),
            description: "added a new feature".to_string(),
            body: "Description of the new feature\nmore details".to_string(),
            footer: Some(vec!["Refs #GCC-123".to_string()]),
            minor: true,
            ..Default::default()
        };
        assert_eq!(commits.0, vec![expected]);
    }
}
