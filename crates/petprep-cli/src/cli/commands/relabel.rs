//! `petprep relabel <image-root> <flat-dir>` – group a flat image listing
//! into per-breed directories.

use anyhow::Result;
use petprep_core::config::PetprepConfig;
use petprep_core::relabel::{relabel, RelabelMode};
use std::path::Path;

pub fn run_relabel(
    cfg: &PetprepConfig,
    image_root: &Path,
    flat_dir: &Path,
    strict: bool,
) -> Result<()> {
    let mode = if strict {
        RelabelMode::Strict
    } else {
        cfg.relabel_mode
    };
    let summary = relabel(image_root, flat_dir, mode)?;
    println!(
        "Relabeled {} file(s) into {} ({} left in place)",
        summary.moved,
        image_root.display(),
        summary.skipped
    );
    Ok(())
}
