//! Binary entry point.
//!
//! With a subcommand the tool runs once and exits; with none it drops into
//! the interactive session (prompt → report → raw paging → restart).

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    if let Err(e) = bikeshare::logging::init() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let args = cli::Cli::parse();
    let sources = cli::resolve_sources(&args)?;

    match args.command {
        Some(command) => cli::run_command(&sources, command),
        None => bikeshare::session::run(&sources),
    }
}
