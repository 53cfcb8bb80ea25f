//! Media storage abstraction for Vitrine.
//!
//! The media picker talks to a [`MediaStore`] rather than to HTTP directly, so
//! the same picker logic runs against the site API or an in-memory store in
//! tests.
//!
//! # Example
//!
//! ```rust
//! use vitrine_storage::{MediaStore, MemoryMediaStore, UploadFile};
//!
//! # async fn example() -> vitrine_error::VitrineResult<()> {
//! let store = MemoryMediaStore::new();
//! let file = UploadFile::new("logo.png", "image/png", vec![0u8; 1024]);
//! let item = store.upload(&file, true, &|_, _| {}).await?;
//! assert_eq!(store.list(None).await?.len(), 1);
//! store.delete(&item.id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod upload;

pub use memory::MemoryMediaStore;
pub use upload::{UploadFile, mime_from_filename};
pub use vitrine_error::{StorageError, StorageErrorKind};

use vitrine_core::MediaItem;
use vitrine_error::VitrineResult;

/// Transport progress callback: `(bytes_sent, bytes_total)` for the current file.
pub type ProgressFn<'a> = dyn Fn(u64, u64) + Send + Sync + 'a;

/// Folder assigned to uploads when none is given.
pub const DEFAULT_FOLDER: &str = "general";

/// Trait for media storage backends.
///
/// Implementations own the media collection; callers never cache it beyond a
/// single picker session.
#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    /// List stored media, optionally restricted to one folder.
    async fn list(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>>;

    /// Store one file and return the created item.
    ///
    /// `compress` asks the backend to recompress images; backends that cannot
    /// do so ignore it. `on_progress` is called as bytes are transmitted.
    async fn upload(
        &self,
        file: &UploadFile,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem>;

    /// Delete the item with the given id.
    async fn delete(&self, id: &str) -> VitrineResult<()>;
}

#[async_trait::async_trait]
impl<T: MediaStore + ?Sized> MediaStore for std::sync::Arc<T> {
    async fn list(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>> {
        (**self).list(folder).await
    }

    async fn upload(
        &self,
        file: &UploadFile,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem> {
        (**self).upload(file, compress, on_progress).await
    }

    async fn delete(&self, id: &str) -> VitrineResult<()> {
        (**self).delete(id).await
    }
}
