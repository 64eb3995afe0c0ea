//! `viz360 add` — Register an environment.

use anyhow::{Context, Result};

use viz360_core::environment::{
    EnvironmentManager, PresetWrite, RegisterOutcome, RegistryChange,
};

use super::common;

/// `viz360 add <name...>`
pub fn cmd_add(name_words: &[String], public_dir: Option<&str>) -> Result<()> {
    let name = common::join_name(name_words)?;
    let manager = common::manager(public_dir);
    run_add(&manager, &name)?;
    Ok(())
}

pub(crate) fn run_add(manager: &EnvironmentManager, name: &str) -> Result<RegisterOutcome> {
    let outcome = manager
        .register(name)
        .with_context(|| format!("Failed to register environment '{}'", name))?;

    eprintln!("✓ Folders ready:");
    eprintln!("  - {}", outcome.img_dir.display());
    eprintln!("  - {}", outcome.preset_dir.display());

    match outcome.preset {
        PresetWrite::Created => {
            eprintln!("✓ Created preset: {}", outcome.preset_file.display())
        }
        PresetWrite::AlreadyExists => {
            eprintln!("⚠ Preset already exists: {}", outcome.preset_file.display());
            eprintln!("  Left untouched to keep existing settings.");
        }
    }

    match &outcome.registry {
        RegistryChange::Added(record) => {
            eprintln!("✓ Environment '{}' added to environments.json", record.name)
        }
        RegistryChange::AlreadyRegistered => {
            eprintln!(
                "⚠ Environment '{}' already exists in environments.json",
                outcome.env_id
            );
            eprintln!("{}", duplicate_hint(&outcome));
            return Ok(outcome);
        }
    }

    if outcome.no_images() {
        eprintln!();
        eprintln!("⚠ No images found in {}", outcome.img_dir.display());
        eprintln!("  The preset has no light entries yet. Add PNG/JPG files, delete");
        eprintln!("  {} and run `viz360 add` again.", outcome.preset_file.display());
    } else {
        eprintln!("  {} light image(s) in preset", outcome.images.len());
    }
    Ok(outcome)
}

/// Next step for a name that is already registered.
fn duplicate_hint(outcome: &RegisterOutcome) -> String {
    format!(
        "  To regenerate its preset, delete {} and run `viz360 add` again;\n  to start over, run `viz360 remove {}` first.",
        outcome.preset_file.display(),
        outcome.env_id
    )
}
