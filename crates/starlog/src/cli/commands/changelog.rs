//! Changelog command

use clap::Args;
use console::style;
use tracing::info;

use starlog_changelog::{transform_changelogs, ChangeLogFormatter, MarkdownFormatter};
use starlog_core::config::load_config_or_default;
use starlog_git::{raw_messages, GitRepo};

use crate::cli::{Cli, OutputFormat};

use super::commits_since_latest_tag;

/// Derive changelog entries from commit history
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to configured changelog file)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(write = self.write, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo = GitRepo::discover(&cwd)?;
        let commits = commits_since_latest_tag(&repo, config.git.tag_pattern.as_deref())?;

        if commits.is_empty() {
            if !cli.quiet {
                println!("{}", style("No commits found since last release.").yellow());
            }
            return Ok(());
        }

        let messages =
            raw_messages(&commits, config.git.commits_url.as_deref().unwrap_or_default());
        let changelogs = transform_changelogs(
            &messages,
            config.changelog.project_link.as_deref(),
            &config.taxonomy,
        );

        let formatter = MarkdownFormatter::new();
        let rendered = formatter.format(&changelogs);

        if self.write {
            let output_path = self
                .output
                .clone()
                .unwrap_or_else(|| cwd.join(&config.changelog.file));

            // Prepend to existing file or create new
            if output_path.exists() {
                let existing = std::fs::read_to_string(&output_path)?;
                let combined = format!("{}\n{}", rendered, existing);
                std::fs::write(&output_path, combined)?;
            } else {
                std::fs::write(&output_path, &rendered)?;
            }

            if !cli.quiet {
                println!(
                    "{} Changelog written to {}",
                    style("✓").green().bold(),
                    style(output_path.display()).cyan()
                );
            }
        } else {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&changelogs)?);
                }
                OutputFormat::Text => {
                    println!("{}", rendered);
                }
            }
        }

        Ok(())
    }
}
