//! In-memory media store.

use crate::{DEFAULT_FOLDER, MediaStore, ProgressFn, UploadFile};
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use vitrine_core::MediaItem;
use vitrine_error::{HttpError, HttpErrorKind, StorageError, StorageErrorKind, VitrineResult};

const TICKS_PER_UPLOAD: u64 = 4;

/// Media store backed by a vector, with switchable failures.
///
/// Uploads report progress in four equal ticks so callers can observe
/// intermediate progress without a network.
#[derive(Debug, Default)]
pub struct MemoryMediaStore {
    items: Mutex<Vec<MediaItem>>,
    uploads: Mutex<Vec<(String, bool)>>,
    next_id: Mutex<u64>,
    fail_list: AtomicBool,
    fail_upload: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryMediaStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with items.
    pub fn with_items(items: Vec<MediaItem>) -> Self {
        let store = Self::default();
        if let Ok(mut guard) = store.items.lock() {
            *guard = items;
        }
        store
    }

    /// Make every subsequent list call fail.
    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent upload fail.
    pub fn fail_upload(&self, fail: bool) {
        self.fail_upload.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent delete fail.
    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Filenames and compress flags of every upload, in arrival order.
    pub fn upload_log(&self) -> Vec<(String, bool)> {
        self.uploads.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn poisoned() -> StorageError {
        StorageError::new(StorageErrorKind::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl MediaStore for MemoryMediaStore {
    async fn list(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(HttpError::new(HttpErrorKind::Request("connection refused".to_string())).into());
        }
        let items = self.items.lock().map_err(|_| Self::poisoned())?;
        Ok(items
            .iter()
            .filter(|item| folder.is_none() || item.folder.as_deref() == folder)
            .cloned()
            .collect())
    }

    async fn upload(
        &self,
        file: &UploadFile,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem> {
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(HttpError::from_status(500, "upload failed").into());
        }
        let total = file.size();
        for tick in 1..=TICKS_PER_UPLOAD {
            on_progress(total * tick / TICKS_PER_UPLOAD, total);
        }

        let id = {
            let mut next = self.next_id.lock().map_err(|_| Self::poisoned())?;
            *next += 1;
            format!("mem-{}", *next)
        };
        let item = MediaItem {
            id: id.clone(),
            filename: file.filename().clone(),
            url: format!("/uploads/{}/{}-{}", DEFAULT_FOLDER, id, file.filename()),
            file_type: file.mime_type().clone(),
            size: Some(total),
            folder: Some(DEFAULT_FOLDER.to_string()),
            created_at: Utc::now(),
        };
        self.uploads
            .lock()
            .map_err(|_| Self::poisoned())?
            .push((file.filename().clone(), compress));
        self.items
            .lock()
            .map_err(|_| Self::poisoned())?
            .push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &str) -> VitrineResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(HttpError::from_status(500, "delete failed").into());
        }
        let mut items = self.items.lock().map_err(|_| Self::poisoned())?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(StorageError::new(StorageErrorKind::NotFound(id.to_string())).into());
        }
        Ok(())
    }
}
