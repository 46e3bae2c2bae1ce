//! Tag operations

use semver::Version;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tags
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(commit) = self.repo.find_commit(oid) {
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag: point at its target commit
                tags.push(TagInfo::new(&name, tag.target_id().to_string()));
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Find the latest tag by semantic version.
    ///
    /// A pattern, when given, filters tag names by substring before version
    /// comparison.
    #[instrument(skip(self), fields(pattern))]
    pub fn find_latest_tag(&self, pattern: Option<&str>) -> Result<Option<TagInfo>> {
        let tags = self.tags()?;

        let mut versioned_tags: Vec<_> = tags
            .into_iter()
            .filter(|t| pattern.map_or(true, |p| t.name.contains(p)))
            .filter_map(|t| {
                t.version
                    .as_ref()
                    .and_then(|v| Version::parse(v).ok())
                    .map(|v| (t, v))
            })
            .collect();

        versioned_tags.sort_by(|a, b| b.1.cmp(&a.1));

        let result = versioned_tags.into_iter().next().map(|(t, _)| t);
        debug!(latest = ?result.as_ref().map(|t| &t.name), "found latest tag");
        Ok(result)
    }
}
