//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod commit;
pub mod compare;
pub mod completions;
pub mod list;
pub mod search;
pub mod utils;
pub mod view;

/// peek - view, compare and open files from other branches and commits
/// without checking them out.
#[derive(Debug, Parser)]
#[command(name = "peek", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report every git invocation.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// View a file as it exists in another branch.
    View {
        /// File to view (the "open" file).
        file: Option<PathBuf>,

        /// Branch to read from instead of picking one.
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Compare a file with its version in another branch.
    Compare {
        /// File to compare (the "open" file).
        file: Option<PathBuf>,

        /// Branch to compare with instead of picking one.
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Browse the files of another branch and open one.
    Search {
        /// Branch to search instead of picking one.
        #[arg(short, long)]
        branch: Option<String>,

        /// Repository-relative path to open instead of picking one.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Open a file as of a commit from its history.
    Commit {
        /// File whose history to browse (the "open" file).
        file: Option<PathBuf>,

        /// Commit to read from instead of picking one.
        #[arg(short, long)]
        commit: Option<String>,
    },

    /// List local and remote branches.
    Branches {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the files tracked at a ref.
    Files {
        /// Branch, tag or commit.
        reference: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the commits that touched a file.
    History {
        /// File to inspect.
        file: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
