//! Safe extraction of gzip-compressed tar archives.
//!
//! Two phases: every member's destination is validated against the
//! extraction root first; only when the whole index is clean does any byte
//! reach the disk. One hostile member rejects the entire archive.

mod validate;

pub use validate::{is_within, resolve_member_path};

use std::fs::{self, File};
use std::io;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::PrepError;

/// Extraction knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Restore numeric uid/gid from the archive (off by default; needs
    /// privileges).
    pub preserve_ownership: bool,
}

/// Validates every member of `archive_path`, then unpacks all of them into
/// `dest_dir`.
///
/// The destination directory is created if missing. On a traversal
/// violation the error names the offending member and nothing has been
/// extracted.
pub fn safe_extract(
    archive_path: &Path,
    dest_dir: &Path,
    opts: &ExtractOptions,
) -> Result<(), PrepError> {
    fs::create_dir_all(dest_dir).map_err(|e| PrepError::fs(dest_dir, e))?;
    let root = dest_dir
        .canonicalize()
        .map_err(|e| PrepError::fs(dest_dir, e))?;

    // Phase 1: walk the whole index without extracting.
    let mut archive = open_archive(archive_path)?;
    let entries = archive
        .entries()
        .map_err(|e| archive_format(archive_path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| archive_format(archive_path, e))?;
        let member = entry
            .path()
            .map_err(|e| archive_format(archive_path, e))?
            .into_owned();
        let safe = resolve_member_path(&root, &member)
            .map(|resolved| is_within(&root, &resolved))
            .unwrap_or(false);
        if !safe {
            return Err(PrepError::PathTraversal {
                member: member.display().to_string(),
                dest: root,
            });
        }
    }

    // Phase 2: the index is clean, unpack for real.
    let mut archive = open_archive(archive_path)?;
    archive.set_preserve_ownerships(opts.preserve_ownership);
    archive
        .unpack(&root)
        .map_err(|e| PrepError::fs(&root, e))?;

    tracing::info!(
        archive = %archive_path.display(),
        dest = %root.display(),
        "extraction complete"
    );
    Ok(())
}

fn open_archive(path: &Path) -> Result<Archive<GzDecoder<File>>, PrepError> {
    let file = File::open(path).map_err(|e| PrepError::fs(path, e))?;
    Ok(Archive::new(GzDecoder::new(file)))
}

fn archive_format(path: &Path, source: io::Error) -> PrepError {
    PrepError::ArchiveFormat {
        path: path.to_path_buf(),
        source,
    }
}
