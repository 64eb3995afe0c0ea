//! `viz360 manifest` — Write `img/<id>/manifest.json` image lists.

use anyhow::{Context, Result};

use super::common;

/// `viz360 manifest [name...]`
pub fn cmd_manifest(name_words: &[String], public_dir: Option<&str>) -> Result<()> {
    let manager = common::manager(public_dir);
    let name = if name_words.is_empty() {
        None
    } else {
        Some(common::join_name(name_words)?)
    };

    let reports = manager
        .write_manifests(name.as_deref())
        .context("Failed to write image manifests")?;

    if reports.is_empty() {
        eprintln!(
            "No environment folders under {}",
            manager.layout().img_root().display()
        );
        return Ok(());
    }
    for report in &reports {
        match report.images {
            Some(count) => eprintln!("✓ {}: manifest with {} image(s)", report.env_id, count),
            None => eprintln!("  {}: no images, skipped", report.env_id),
        }
    }
    Ok(())
}
