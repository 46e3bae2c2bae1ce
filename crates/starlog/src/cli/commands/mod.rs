//! CLI commands

mod bump;
mod changelog;
mod init;
mod parse;

pub use bump::BumpCommand;
pub use changelog::ChangelogCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;

use starlog_git::{CommitInfo, GitRepo};

/// Collect the commits a command should operate on: everything since the
/// latest version tag, or the whole branch when the repository has no tags.
fn commits_since_latest_tag(
    repo: &GitRepo,
    tag_pattern: Option<&str>,
) -> anyhow::Result<Vec<CommitInfo>> {
    let latest_tag = repo.find_latest_tag(tag_pattern)?;

    let commits = match &latest_tag {
        Some(tag) => repo.commits_since_tag(&tag.name)?,
        None => repo.all_commits()?,
    };

    Ok(commits)
}
