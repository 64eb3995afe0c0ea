//! viz360 CLI library — argument parsing and command dispatch.

mod cli;
mod dispatch;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

/// Run the CLI — parses args and dispatches to command handlers.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    viz360_core::observability::init_tracing();
    tracing::debug!(command = ?cli.command, "Dispatching");
    dispatch::dispatch(&cli)
}
