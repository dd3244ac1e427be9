//! `petprep score <image>` – one-shot prediction request.

use anyhow::{Context, Result};
use petprep_core::config::PetprepConfig;
use petprep_core::score;
use std::path::Path;

pub fn run_score(cfg: &PetprepConfig, image: &Path, endpoint: Option<String>) -> Result<()> {
    let endpoint = endpoint
        .or_else(|| cfg.score_url.clone())
        .context("no scoring endpoint: pass --endpoint or set score_url in the config")?;

    let labels = score::score_image(&endpoint, image, &cfg.http_options())?;
    println!("Prediction results:");
    for label in labels {
        println!("{label}");
    }
    Ok(())
}
