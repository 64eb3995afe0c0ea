//! `viz360 remove` — Remove an environment from the registry.
//!
//! Folders are never deleted; their paths are printed for manual cleanup.

use anyhow::{Context, Result};

use viz360_core::environment::{
    AlwaysConfirm, ConfirmRemoval, EnvironmentManager, UnregisterOutcome,
};

use super::common;

/// `viz360 remove <name...>`
pub fn cmd_remove(name_words: &[String], public_dir: Option<&str>, force: bool) -> Result<()> {
    let name = common::join_name(name_words)?;
    let manager = common::manager(public_dir);
    if force {
        run_remove(&manager, &name, &mut AlwaysConfirm)?;
    } else {
        run_remove(&manager, &name, &mut common::StdinConfirm::stdin())?;
    }
    Ok(())
}

pub(crate) fn run_remove(
    manager: &EnvironmentManager,
    name: &str,
    confirm: &mut dyn ConfirmRemoval,
) -> Result<UnregisterOutcome> {
    let outcome = manager
        .unregister(name, confirm)
        .with_context(|| format!("Failed to remove environment '{}'", name))?;

    match &outcome {
        UnregisterOutcome::NotFound { env_id } => {
            eprintln!("✗ Environment '{}' not found", env_id);
        }
        UnregisterOutcome::Declined { .. } => {
            eprintln!("Cancelled.");
        }
        UnregisterOutcome::Removed { record, kept_dirs } => {
            eprintln!("✓ Environment '{}' removed from environments.json", record.name);
            eprintln!();
            eprintln!("💡 Folders were kept. To delete them, run:");
            for dir in kept_dirs {
                eprintln!("   rm -r '{}'", dir.display());
            }
        }
    }
    Ok(outcome)
}
