//! `petprep extract <archive>` – validate and extract a tar.gz archive.

use anyhow::Result;
use petprep_core::config::PetprepConfig;
use petprep_core::extract::{safe_extract, ExtractOptions};
use std::path::{Path, PathBuf};

use super::resolve_base_dir;

pub fn run_extract(
    cfg: &PetprepConfig,
    archive: &Path,
    dest_dir: Option<PathBuf>,
    preserve_ownership: bool,
) -> Result<()> {
    let dest_dir = resolve_base_dir(cfg, dest_dir)?;
    let opts = ExtractOptions {
        preserve_ownership: preserve_ownership || cfg.preserve_ownership,
    };
    safe_extract(archive, &dest_dir, &opts)?;
    println!("Extracted {} into {}", archive.display(), dest_dir.display());
    Ok(())
}
