//! Cache key derivation for downloaded files.

use sha2::{Digest, Sha256};

/// Hex chars of the SHA-256 digest kept in the cache filename.
const KEY_LEN: usize = 16;

/// Returns the first 16 lowercase hex chars of SHA-256 over the URL string.
///
/// Keys the download cache by the full URL rather than the basename alone,
/// so distinct URLs never alias the same local file.
pub fn url_cache_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut key = hex::encode(digest);
    key.truncate(KEY_LEN);
    key
}
