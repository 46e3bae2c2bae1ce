//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{BumpCommand, ChangelogCommand, InitCommand, ParseCommand};

/// Starlog - conventional commit parsing and changelog CLI
#[derive(Debug, Parser)]
#[command(name = "starlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new Starlog configuration
    Init(InitCommand),

    /// Parse commit messages into structured records
    Parse(ParseCommand),

    /// Derive changelog entries from commit history
    Changelog(ChangelogCommand),

    /// Suggest the next version from commit history
    Bump(BumpCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Parse(ref cmd) => cmd.execute(&self),
            Commands::Changelog(ref cmd) => cmd.execute(&self),
            Commands::Bump(ref cmd) => cmd.execute(&self),
        }
    }
}
