//! Blocking download of one vendor file into the temp directory.
//!
//! Single HTTP GET via libcurl, streaming the body straight to the
//! destination file. No retries and no overall timeout; a collection run
//! is expected to fail loudly on a bad network.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::manifest::VendorFile;

/// Failure of a single vendor-file download.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Curl reported a transport error (DNS, connect, TLS, aborted write).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Destination file could not be created.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Declared `file_name` has no usable base name (e.g. `..`).
    #[error("no usable file name in {0:?}")]
    BadFileName(String),
}

impl VendorFile {
    /// Downloads this entry into `temp_dir`, overwriting any existing file
    /// with the same base name, and returns the destination path.
    pub fn download_to(&self, temp_dir: &Path) -> Result<PathBuf, DownloadError> {
        let base = self
            .base_name()
            .ok_or_else(|| DownloadError::BadFileName(self.file_name.clone()))?;
        let dest = temp_dir.join(base);
        fetch_url(&self.url, &dest)?;
        Ok(dest)
    }

    /// Downloads this entry and opens the local copy.
    pub fn open(&self, temp_dir: &Path) -> Result<File, DownloadError> {
        let dest = self.download_to(temp_dir)?;
        Ok(File::open(dest)?)
    }
}

/// Performs the blocking GET, writing the body to `dest`.
fn fetch_url(url: &str, dest: &Path) -> Result<(), DownloadError> {
    let mut file = File::create(dest)?;
    let dest_label = dest.display().to_string();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                tracing::warn!("write to {} failed: {}", dest_label, e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http(code));
    }
    Ok(())
}
