//! Local file storage for uploaded content.

use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Metadata returned after persisting an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name the file was stored under
    pub filename: String,
    /// Size in bytes
    pub size: u64,
}

/// Owns the upload directory and persists incoming files.
///
/// Stored names are prefixed with the current epoch milliseconds, which
/// keeps concurrent uploads of the same filename from colliding. No
/// content-type or size limits are applied.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create the store, ensuring the upload directory exists.
    pub async fn init(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::internal(format!("failed to create upload dir: {e}")))?;

        Ok(Self { dir })
    }

    /// Persist uploaded bytes under a timestamped name.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<StoredFile> {
        let filename = format!("{}_{}", chrono::Utc::now().timestamp_millis(), original_name);
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::upload(format!("failed to store file: {e}")))?;

        tracing::info!(filename = %filename, size = bytes.len(), "file stored");

        Ok(StoredFile {
            filename,
            size: bytes.len() as u64,
        })
    }

    /// Directory uploads are written to.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}
