//! URL modeling and local filename derivation.
//!
//! The fetch cache is keyed by the source URL: the local filename is a short
//! SHA-256 prefix of the full URL joined with the sanitized last path
//! segment, so two URLs that happen to share a basename never collide and a
//! filename can never smuggle path separators out of the download directory.

mod cache_key;
mod path;
mod sanitize;

pub use cache_key::url_cache_key;
pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Basename used when the URL path has no usable last segment.
const DEFAULT_BASENAME: &str = "download.bin";

/// Derives the cache filename for storing a download of `url`.
///
/// Format: `<16 hex chars of sha256(url)>-<sanitized basename>`, e.g.
/// `a3f09c11de05b772-images.tar.gz`. Always a single path component.
pub fn derive_local_filename(url: &str) -> String {
    let base = filename_from_url_path(url)
        .map(|raw| sanitize_filename(&raw))
        .filter(|s| !s.is_empty() && s != "." && s != "..")
        .unwrap_or_else(|| DEFAULT_BASENAME.to_string());

    format!("{}-{}", url_cache_key(url), base)
}
