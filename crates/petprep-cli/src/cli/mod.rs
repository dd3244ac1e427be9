//! CLI for the petprep dataset preparation toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use petprep_core::config;
use std::path::PathBuf;

use commands::{run_extract, run_fetch, run_prepare, run_relabel, run_score};

/// Top-level CLI for petprep.
#[derive(Debug, Parser)]
#[command(name = "petprep")]
#[command(about = "petprep: fetch, safely extract, and relabel pet image datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download an archive if it is not already present locally.
    Fetch {
        /// Direct HTTP/HTTPS URL of the archive.
        url: String,

        /// Directory to store the download in (default: configured base
        /// dir, then the current directory).
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Validate and extract a previously fetched archive.
    Extract {
        /// Path to the tar.gz archive.
        archive: PathBuf,

        /// Directory to extract into (default: configured base dir, then
        /// the current directory).
        #[arg(long)]
        dest_dir: Option<PathBuf>,

        /// Restore numeric uid/gid from the archive (needs privileges).
        #[arg(long)]
        preserve_ownership: bool,
    },

    /// Group a flat image listing into per-breed directories.
    Relabel {
        /// Directory breed subdirectories are created under.
        image_root: PathBuf,

        /// Directory holding the unsorted flat image files.
        flat_dir: PathBuf,

        /// Fail on files that do not match the breed naming pattern.
        #[arg(long)]
        strict: bool,
    },

    /// Run the whole pipeline: fetch, extract, relabel.
    Prepare {
        /// Direct HTTP/HTTPS URL of the dataset archive.
        url: String,

        /// Working directory for the dataset (default: configured base
        /// dir, then the current directory).
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Fail on files that do not match the breed naming pattern.
        #[arg(long)]
        strict: bool,
    },

    /// Send one image to the prediction service and print its labels.
    Score {
        /// Path to a JPEG image.
        image: PathBuf,

        /// Prediction service URL (default: score_url from the config).
        #[arg(long)]
        endpoint: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url, base_dir } => run_fetch(&cfg, &url, base_dir)?,
            CliCommand::Extract {
                archive,
                dest_dir,
                preserve_ownership,
            } => run_extract(&cfg, &archive, dest_dir, preserve_ownership)?,
            CliCommand::Relabel {
                image_root,
                flat_dir,
                strict,
            } => run_relabel(&cfg, &image_root, &flat_dir, strict)?,
            CliCommand::Prepare {
                url,
                base_dir,
                strict,
            } => run_prepare(&cfg, &url, base_dir, strict)?,
            CliCommand::Score { image, endpoint } => run_score(&cfg, &image, endpoint)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
