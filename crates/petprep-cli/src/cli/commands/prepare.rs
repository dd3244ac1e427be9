//! `petprep prepare <url>` – fetch, extract, and relabel in one go.

use anyhow::Result;
use petprep_core::config::PetprepConfig;
use petprep_core::pipeline;
use petprep_core::relabel::RelabelMode;
use std::path::PathBuf;

use super::resolve_base_dir;

pub fn run_prepare(
    cfg: &PetprepConfig,
    url: &str,
    base_dir: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let base_dir = resolve_base_dir(cfg, base_dir)?;
    let mut cfg = cfg.clone();
    if strict {
        cfg.relabel_mode = RelabelMode::Strict;
    }

    let report = pipeline::prepare_dataset(url, &base_dir, &cfg)?;
    println!(
        "Prepared {} ({} images relabeled, {} left in place)",
        report.archive_path.display(),
        report.relabel.moved,
        report.relabel.skipped
    );
    Ok(())
}
