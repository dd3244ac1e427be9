//! One module per subcommand.

mod extract;
mod fetch;
mod prepare;
mod relabel;
mod score;

pub use extract::run_extract;
pub use fetch::run_fetch;
pub use prepare::run_prepare;
pub use relabel::run_relabel;
pub use score::run_score;

use anyhow::{Context, Result};
use petprep_core::config::PetprepConfig;
use std::path::PathBuf;

/// Flag value, then configured base dir, then the current directory.
pub(crate) fn resolve_base_dir(cfg: &PetprepConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or_else(|| cfg.base_dir.clone()) {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("cannot resolve current directory"),
    }
}
