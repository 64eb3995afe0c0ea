//! `viz360 list` — List registered environments with on-disk status.

use anyhow::{Context, Result};

use viz360_core::environment::{EnvironmentManager, EnvironmentStatus};

use super::common;

/// `viz360 list`
pub fn cmd_list(public_dir: Option<&str>, json_output: bool) -> Result<()> {
    let manager = common::manager(public_dir);
    let statuses = load_statuses(&manager)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }
    print_statuses(&statuses);
    Ok(())
}

fn load_statuses(manager: &EnvironmentManager) -> Result<Vec<EnvironmentStatus>> {
    manager.list().with_context(|| {
        format!(
            "Failed to read registry: {}",
            manager.store().path().display()
        )
    })
}

fn print_statuses(statuses: &[EnvironmentStatus]) {
    if statuses.is_empty() {
        eprintln!("No environments configured. Run `viz360 add <name>` first.");
        return;
    }

    eprintln!("📋 Configured environments ({}):", statuses.len());
    eprintln!();
    for (i, status) in statuses.iter().enumerate() {
        let record = &status.record;
        eprintln!("{}. {} (id: {})", i + 1, record.name, record.id);
        eprintln!("   images: {}", record.img_path);
        eprintln!("   preset: {}", record.preset_path);
        match status.image_count {
            Some(count) => eprintln!("   ✓ {} image(s) found", count),
            None => eprintln!("   ✗ image folder missing"),
        }
        if status.preset_exists {
            eprintln!("   ✓ preset exists");
        } else {
            eprintln!("   ✗ preset missing");
        }
        if !status.thumbnail_exists {
            eprintln!("   ⚠ no thumbnail ({})", record.thumbnail);
        }
        eprintln!();
    }
}
