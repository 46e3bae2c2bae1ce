//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::Sort;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get all commits on the current branch
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }

    /// Get the most recent N commits
    pub fn recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid in revwalk.take(count) {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }

    /// Get commits since a tag
    pub fn commits_since_tag(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let tag_ref = format!("refs/tags/{}", tag_name);
        let reference = self.repo.find_reference(&tag_ref)?;
        let target = reference.peel_to_commit()?;

        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        revwalk.hide(target.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let subject = commit.summary().unwrap_or("(no message)").to_string();
    let body = commit.body().map(|b| b.to_string());

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    let info = CommitInfo::new(
        hash,
        subject,
        author.name().unwrap_or("Unknown"),
        author.email().unwrap_or("unknown@example.com"),
        timestamp,
    );

    match body {
        Some(body) => info.with_body(body),
        None => info,
    }
}
