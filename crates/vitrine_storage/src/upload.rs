//! Files queued for upload.

use bytes::Bytes;
use std::path::Path;
use vitrine_error::{StorageError, StorageErrorKind, VitrineResult};

/// A local file held in memory until it is transmitted.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct UploadFile {
    filename: String,
    mime_type: String,
    data: Bytes,
}

impl UploadFile {
    /// Wrap file contents with their name and MIME type.
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn from_path(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = mime_from_filename(&filename).to_string();
        tracing::debug!(filename = %filename, mime_type = %mime_type, size = data.len(), "Read upload file");
        Ok(Self::new(filename, mime_type, data))
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// MIME type for the common web media extensions.
///
/// ```
/// use vitrine_storage::mime_from_filename;
///
/// assert_eq!(mime_from_filename("Hero.MP4"), "video/mp4");
/// assert_eq!(mime_from_filename("notes"), "application/octet-stream");
/// ```
pub fn mime_from_filename(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
