use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use treepick::SelectionMode;

/// Treepick - searchable multi-select tree picker
#[derive(Parser, Debug)]
#[command(name = "treepick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./.treepick.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that builds a tree
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// JSON file with the item array
    #[arg(short, long)]
    pub items: PathBuf,

    /// Exclude items (and their descendants) with this label
    #[arg(short = 'x', long = "exclude", value_name = "LABEL")]
    pub exclude: Vec<String>,

    /// Pre-select items with this label
    #[arg(short, long = "select", value_name = "LABEL")]
    pub select: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree with checkbox states
    Show {
        #[command(flatten)]
        tree: TreeArgs,

        /// Only show items matching this text (and their ancestors)
        #[arg(long)]
        search: Option<String>,

        /// Start with every parent collapsed
        #[arg(long)]
        collapsed: bool,
    },

    /// Toggle items by label and print the reported selection
    Select {
        #[command(flatten)]
        tree: TreeArgs,

        /// Check items with this label
        #[arg(short, long = "toggle", value_name = "LABEL")]
        toggle: Vec<String>,

        /// Uncheck items with this label (applied after --toggle)
        #[arg(short, long = "untoggle", value_name = "LABEL")]
        untoggle: Vec<String>,

        /// Which selected labels to report
        #[arg(short, long)]
        mode: Option<SelectionMode>,

        /// Single-select: each toggle replaces the selection
        #[arg(long)]
        single: bool,
    },

    /// Pick items interactively and print the confirmed selection
    Pick {
        #[command(flatten)]
        tree: TreeArgs,

        /// Which selected labels to report
        #[arg(short, long)]
        mode: Option<SelectionMode>,

        /// Single-select: each toggle replaces the selection
        #[arg(long)]
        single: bool,

        /// Start with every parent collapsed
        #[arg(long)]
        collapsed: bool,
    },
}
