//! Command-line definitions and command implementations.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use octo_github::Openness;

pub mod completions;
pub mod search;

/// octo - search GitHub issues from the terminal.
#[derive(Debug, Parser)]
#[command(name = "octo", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that talks to GitHub.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Path to the config file.
    #[arg(long, global = true, env = "OCTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// GitHub API URL (for GitHub Enterprise).
    #[arg(long, global = true, env = "OCTO_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search GitHub.
    Search {
        #[command(subcommand)]
        target: SearchTarget,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum SearchTarget {
    /// Search issues and pull requests.
    Issues(IssuesArgs),
}

/// Filters for `octo search issues`.
#[derive(Debug, Clone, Args)]
pub struct IssuesArgs {
    /// Repository to search (owner/name).
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Item type qualifier (`issue` or `pr`).
    #[arg(short = 't', long = "type", default_value = "issue", conflicts_with = "no_type")]
    pub kind: String,

    /// Search issues and pull requests alike.
    #[arg(long)]
    pub no_type: bool,

    /// Open or closed.
    #[arg(short, long, default_value = "open")]
    pub state: Openness,

    /// User involved in the item (author, assignee, mention or commenter).
    #[arg(long)]
    pub involves: Option<String>,

    /// Author of the item.
    #[arg(short, long)]
    pub author: Option<String>,

    /// Search archived repositories.
    #[arg(long)]
    pub archived: bool,

    /// Send the request without credentials.
    #[arg(long)]
    pub anonymous: bool,

    /// Print the raw result envelope as JSON.
    #[arg(long)]
    pub json: bool,
}
