//! Save-as collaborator for exported files.
//!
//! Exporters only know bytes and a filename. The [`Downloader`] decides where
//! the data ends up; [`FileDownloader`] writes into a directory on disk.

use std::{fmt, future::Future, io::Error, path::PathBuf};

#[derive(Debug)]
pub enum DownloadError {
    IoError(Error),
    InvalidFilename(String),
}

impl From<Error> for DownloadError {
    fn from(err: Error) -> Self {
        DownloadError::IoError(err)
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::IoError(e) => write!(f, "{}", e),
            DownloadError::InvalidFilename(name) => write!(f, "Invalid filename: '{}'", name),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Persists data under a filename and offers it to the user.
pub trait Downloader {
    fn save(
        &self,
        data: &[u8],
        filename: &str,
    ) -> impl Future<Output = Result<PathBuf, DownloadError>> + Send;
}

/// Writes downloads into a directory, creating it when missing.
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Builds the target path for a filename.
    ///
    /// Path separators are replaced with `_` so names like
    /// `AC/DC - Back in Black.cue` stay inside the download directory.
    pub fn target_path(&self, filename: &str) -> Result<PathBuf, DownloadError> {
        let sanitized: String = filename
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                c => c,
            })
            .collect();

        let trimmed = sanitized.trim();
        if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
            return Err(DownloadError::InvalidFilename(filename.to_string()));
        }

        Ok(self.dir.join(trimmed))
    }
}

impl Downloader for FileDownloader {
    async fn save(&self, data: &[u8], filename: &str) -> Result<PathBuf, DownloadError> {
        let path = self.target_path(filename)?;
        async_fs::create_dir_all(&self.dir).await?;
        async_fs::write(&path, data).await?;
        Ok(path)
    }
}
