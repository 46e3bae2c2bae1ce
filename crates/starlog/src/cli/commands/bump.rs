//! Bump command

use clap::Args;
use console::style;
use semver::Version;
use tracing::info;

use starlog_commits::transform_commits;
use starlog_core::config::load_config_or_default;
use starlog_git::{raw_messages, GitRepo};

use crate::cli::{Cli, OutputFormat};

use super::commits_since_latest_tag;

/// Suggest the next version from commit history
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Current version (defaults to the latest tag's version)
    #[arg(long, value_name = "VERSION")]
    pub current: Option<Version>,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(current = ?self.current, "executing bump command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo = GitRepo::discover(&cwd)?;
        let latest_tag = repo.find_latest_tag(config.git.tag_pattern.as_deref())?;

        let current = match &self.current {
            Some(version) => version.clone(),
            None => latest_tag
                .as_ref()
                .and_then(|t| t.version.as_deref())
                .map(Version::parse)
                .transpose()?
                .unwrap_or_else(|| Version::new(0, 0, 0)),
        };

        let commits = commits_since_latest_tag(&repo, config.git.tag_pattern.as_deref())?;
        let messages =
            raw_messages(&commits, config.git.commits_url.as_deref().unwrap_or_default());
        let parsed = transform_commits(&messages, &config.taxonomy);

        let next = parsed.bump(&current);

        let impact = if parsed.is_major() {
            "major"
        } else if parsed.is_minor() {
            "minor"
        } else if parsed.is_patch() {
            "patch"
        } else {
            "none"
        };

        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "current": current.to_string(),
                        "next": next.to_string(),
                        "impact": impact,
                        "commits": parsed.len(),
                    })
                );
            }
            OutputFormat::Text => {
                if cli.quiet {
                    println!("{}", next);
                } else {
                    println!(
                        "{} {} -> {} ({} commits, {} impact)",
                        style("Version:").bold(),
                        current,
                        style(&next).green().bold(),
                        parsed.len(),
                        impact
                    );
                }
            }
        }

        Ok(())
    }
}
