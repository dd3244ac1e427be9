//! Sequential preparation pipeline: fetch, safe-extract, relabel.
//!
//! Stages communicate only through the filesystem. The fetch skips when the
//! archive is already present and extraction is all-or-nothing, so a run
//! that failed before extraction finished can simply be repeated.

use std::path::{Path, PathBuf};

use crate::config::PetprepConfig;
use crate::error::PrepError;
use crate::extract::{safe_extract, ExtractOptions};
use crate::fetch::ensure_local;
use crate::relabel::{relabel, RelabelSummary};

/// Directory inside the dataset archive holding the flat image listing.
const IMAGES_DIR: &str = "images";

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct PrepareReport {
    pub archive_path: PathBuf,
    pub relabel: RelabelSummary,
}

/// Runs the full preparation: download `url` into `base_dir`, extract the
/// archive there, and group `base_dir/images` into per-breed directories.
pub fn prepare_dataset(
    url: &str,
    base_dir: &Path,
    cfg: &PetprepConfig,
) -> Result<PrepareReport, PrepError> {
    let archive_path = ensure_local(url, base_dir, &cfg.http_options())?;

    let extract_opts = ExtractOptions {
        preserve_ownership: cfg.preserve_ownership,
    };
    safe_extract(&archive_path, base_dir, &extract_opts)?;

    let images = base_dir.join(IMAGES_DIR);
    let summary = relabel(&images, &images, cfg.relabel_mode)?;

    Ok(PrepareReport {
        archive_path,
        relabel: summary,
    })
}
