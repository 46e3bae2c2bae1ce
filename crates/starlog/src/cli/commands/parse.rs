//! Parse command

use clap::Args;
use console::style;
use tracing::info;

use starlog_commits::transform_commits;
use starlog_core::config::load_config_or_default;
use starlog_git::{raw_messages, GitRepo};

use crate::cli::{Cli, OutputFormat};

use super::commits_since_latest_tag;

/// Parse commit messages into structured records
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Parse the given message instead of reading repository history
    #[arg(short, long = "message", value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Parse the most recent N commits instead of commits since the last tag
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub recent: Option<usize>,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            message_count = self.messages.len(),
            recent = ?self.recent,
            "executing parse command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let messages = if self.messages.is_empty() {
            let repo = GitRepo::discover(&cwd)?;
            let commits = match self.recent {
                Some(count) => repo.recent_commits(count)?,
                None => commits_since_latest_tag(&repo, config.git.tag_pattern.as_deref())?,
            };
            raw_messages(&commits, config.git.commits_url.as_deref().unwrap_or_default())
        } else {
            self.messages.clone()
        };

        if messages.is_empty() {
            if !cli.quiet {
                println!("{}", style("No commits found since last release.").yellow());
            }
            return Ok(());
        }

        let commits = transform_commits(&messages, &config.taxonomy);

        match cli.format {
            OutputFormat::Json => {
                for commit in commits.iter() {
                    // Display is the canonical key-ordered JSON rendering
                    println!("{}", commit);
                }
            }
            OutputFormat::Text => {
                for commit in commits.iter() {
                    let impact = if commit.major {
                        style("major").red().bold()
                    } else if commit.minor {
                        style("minor").yellow()
                    } else if commit.patch {
                        style("patch").green()
                    } else {
                        style("none").dim()
                    };

                    let scope = if commit.scope.is_empty() {
                        String::new()
                    } else {
                        format!("({})", commit.scope)
                    };

                    println!(
                        "{}{} {} [{}]",
                        style(&commit.category).cyan(),
                        scope,
                        commit.description,
                        impact
                    );
                }
            }
        }

        Ok(())
    }
}
