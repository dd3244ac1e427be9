//! Download-if-absent fetcher.
//!
//! A download is keyed by its URL-derived filename; when that file already
//! exists the network is never touched. Otherwise the body streams into a
//! `.part` file that is renamed into place on success, so a present final
//! name always means a completed transfer.

mod http;
mod storage;

pub use http::HttpOptions;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PrepError;
use crate::url_model;

/// Ensures a local copy of `url` exists under `base_dir` and returns its path.
pub fn ensure_local(url: &str, base_dir: &Path, opts: &HttpOptions) -> Result<PathBuf, PrepError> {
    let local_path = base_dir.join(url_model::derive_local_filename(url));
    if local_path.exists() {
        tracing::debug!(path = %local_path.display(), "local copy present, skipping download");
        return Ok(local_path);
    }

    fs::create_dir_all(base_dir).map_err(|e| PrepError::fs(base_dir, e))?;
    let mut part = storage::PartFile::create(&local_path)
        .map_err(|e| PrepError::fs(storage::temp_path(&local_path), e))?;

    tracing::info!(url, path = %local_path.display(), "downloading");
    match http::get_to_part(url, &mut part, opts) {
        Ok(bytes) => {
            part.finalize(&local_path)
                .map_err(|e| PrepError::fs(&local_path, e))?;
            tracing::info!(bytes, path = %local_path.display(), "download complete");
            Ok(local_path)
        }
        Err(e) => {
            let temp = part.temp_path().to_path_buf();
            drop(part);
            let _ = fs::remove_file(&temp);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_file_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        // Port 9 (discard) is never contacted: the pre-seeded file wins.
        let url = "http://127.0.0.1:9/images.tar.gz";
        let name = url_model::derive_local_filename(url);
        fs::write(dir.path().join(&name), b"cached").unwrap();

        let got = ensure_local(url, dir.path(), &HttpOptions::default()).unwrap();
        assert_eq!(got, dir.path().join(&name));
        assert_eq!(fs::read(&got).unwrap(), b"cached");
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = "http://127.0.0.1:9/images.tar.gz";
        let err = ensure_local(url, dir.path(), &HttpOptions::default()).unwrap_err();
        assert!(matches!(err, PrepError::Transport { .. }), "got {err:?}");
        // No temp or final file left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
