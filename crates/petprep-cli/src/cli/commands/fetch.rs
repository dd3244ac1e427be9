//! `petprep fetch <url>` – download an archive if absent.

use anyhow::Result;
use petprep_core::config::PetprepConfig;
use petprep_core::fetch;
use std::path::PathBuf;

use super::resolve_base_dir;

pub fn run_fetch(cfg: &PetprepConfig, url: &str, base_dir: Option<PathBuf>) -> Result<()> {
    let base_dir = resolve_base_dir(cfg, base_dir)?;
    let path = fetch::ensure_local(url, &base_dir, &cfg.http_options())?;
    println!("{}", path.display());
    Ok(())
}
