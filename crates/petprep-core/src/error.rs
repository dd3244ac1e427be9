//! Error taxonomy for the preparation pipeline.
//!
//! Every core operation fails with a [`PrepError`]; there is no internal
//! recovery. The CLI prints the error chain and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    /// Curl reported a failure (DNS, connect, mid-transfer abort).
    #[error("transport failure for {url}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// The archive could not be opened or its index enumerated.
    #[error("unreadable archive {}", .path.display())]
    ArchiveFormat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A member's destination escapes the extraction root. Raised during
    /// validation, before anything is written to disk.
    #[error("archive member `{member}` escapes extraction directory {}", .dest.display())]
    PathTraversal { member: String, dest: PathBuf },

    /// A relabel move would overwrite an existing file. Never overwritten
    /// silently.
    #[error("destination already exists: {}", .path.display())]
    DestinationExists { path: PathBuf },

    /// Strict-mode relabel found a file that does not carry a breed label.
    #[error("file does not match the breed naming pattern: {}", .path.display())]
    UnlabeledFile { path: PathBuf },

    /// Directory creation, rename, or read/write failure.
    #[error("filesystem operation failed on {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrepError {
    /// Shorthand for wrapping an I/O error with the path it concerns.
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PrepError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
