//! Command dispatch: maps each parsed subcommand onto its console command.

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> Result<()> {
    let public_dir = cli.public_dir.as_deref();
    match &cli.command {
        Commands::Add { name } => viz360_commands::env::cmd_add(name, public_dir),
        Commands::Remove { name, force } => {
            viz360_commands::env::cmd_remove(name, public_dir, *force)
        }
        Commands::List { json } => viz360_commands::env::cmd_list(public_dir, *json),
        Commands::Manifest { name } => viz360_commands::env::cmd_manifest(name, public_dir),
    }
}
