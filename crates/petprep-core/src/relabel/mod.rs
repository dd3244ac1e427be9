//! Breed-directory relabeling of a flat image listing.
//!
//! Moves every `<breed>_<index>.jpg` in the flat directory into
//! `image_root/<breed>/`, creating breed directories on first use. Files
//! without a breed label are a policy decision: skipped by default, an
//! error in strict mode.

mod pattern;

pub use pattern::{parse_breed_filename, BreedImage};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PrepError;

/// Policy for files that do not carry a `<breed>_<index>.jpg` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelabelMode {
    /// Leave unrecognized files in place.
    #[default]
    Lenient,
    /// Fail on the first unrecognized file.
    Strict,
}

/// Counts of what a relabel pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelabelSummary {
    pub moved: usize,
    pub skipped: usize,
}

/// Groups the flat listing in `flat_dir` into breed directories under
/// `image_root`.
///
/// Moves are renames, never copies, and fail if the destination already
/// exists. Re-running over the emptied flat directory is a no-op.
pub fn relabel(
    image_root: &Path,
    flat_dir: &Path,
    mode: RelabelMode,
) -> Result<RelabelSummary, PrepError> {
    let mut summary = RelabelSummary::default();

    let entries = fs::read_dir(flat_dir).map_err(|e| PrepError::fs(flat_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| PrepError::fs(flat_dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| PrepError::fs(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        tracing::debug!(file = %name.to_string_lossy(), "examining");

        let Some(image) = name.to_str().and_then(parse_breed_filename) else {
            match mode {
                RelabelMode::Lenient => {
                    summary.skipped += 1;
                    continue;
                }
                RelabelMode::Strict => {
                    return Err(PrepError::UnlabeledFile { path: entry.path() })
                }
            }
        };

        let breed_dir = image_root.join(&image.breed);
        if !breed_dir.exists() {
            fs::create_dir_all(&breed_dir).map_err(|e| PrepError::fs(&breed_dir, e))?;
        }
        let src = entry.path();
        let dest = breed_dir.join(&name);
        if dest.exists() {
            return Err(PrepError::DestinationExists { path: dest });
        }
        fs::rename(&src, &dest).map_err(|e| PrepError::fs(&src, e))?;
        tracing::debug!(breed = %image.breed, from = %src.display(), "moved");
        summary.moved += 1;
    }

    tracing::info!(
        moved = summary.moved,
        skipped = summary.skipped,
        root = %image_root.display(),
        "relabel pass complete"
    );
    Ok(summary)
}
