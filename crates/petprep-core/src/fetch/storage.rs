//! Temp-file lifecycle for downloads.
//!
//! Bodies stream into `<final>.part` and are renamed into place only after
//! the transfer completes, so a file at the final name is always a finished
//! download.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Sequential writer for an in-progress download.
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Creates (truncating) the `.part` file next to `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(PartFile {
            file,
            temp_path,
            written: 0,
        })
    }

    /// Appends one chunk of the response body.
    pub fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Total bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Path of the underlying temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Syncs to disk and atomically renames onto `final_path`, consuming the
    /// writer.
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        self.file.sync_all()?;
        drop(self.file);
        fs::rename(&self.temp_path, final_path)
    }
}
