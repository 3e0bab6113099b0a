//! Treepick CLI - searchable multi-select tree picker
//!
//! Usage: treepick <COMMAND>
//!
//! Commands:
//!   show    Print the tree with checkbox states
//!   select  Toggle items by label and print the reported selection
//!   pick    Pick items interactively

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{fmt, prelude::*};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Show {
            tree,
            search,
            collapsed,
        } => commands::show::cmd_show(tree, search.as_deref(), *collapsed, config, cli.json),
        Commands::Select {
            tree,
            toggle,
            untoggle,
            mode,
            single,
        } => commands::select::cmd_select(
            tree, toggle, untoggle, *mode, *single, config, cli.json,
        ),
        Commands::Pick {
            tree,
            mode,
            single,
            collapsed,
        } => commands::pick::cmd_pick(tree, *mode, *single, *collapsed, config, cli.json),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
