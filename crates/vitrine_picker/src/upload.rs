//! Upload tab: local files, validation, sequential transmission.

use crate::{AcceptFilter, ImageAdjustments, Ticket};
use std::sync::Arc;
use tokio::sync::watch;
use vitrine_core::MediaItem;
use vitrine_error::{ValidationError, ValidationErrorKind, VitrineResult};
use vitrine_storage::{MediaStore, UploadFile};

/// A file refused before transmission.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Rejection {
    filename: String,
    error: ValidationError,
}

const MEGABYTE: u64 = 1024 * 1024;

impl Rejection {
    /// Notification text shown to the visitor, naming the file.
    pub fn message(&self) -> String {
        match &self.error.kind {
            ValidationErrorKind::FileTooLarge { filename, limit, .. } => {
                let limit = if *limit >= MEGABYTE && limit % MEGABYTE == 0 {
                    format!("{}MB", limit / MEGABYTE)
                } else {
                    format!("{} bytes", limit)
                };
                format!("{} excede o tamanho máximo de {}", filename, limit)
            }
            ValidationErrorKind::UnsupportedType { filename, file_type } => {
                format!("{}: tipo de arquivo não suportado ({})", filename, file_type)
            }
            other => format!("{}: {}", self.filename, other),
        }
    }
}

/// The post-upload edit step for a single uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct EditStep {
    item: MediaItem,
    adjustments: ImageAdjustments,
}

impl EditStep {
    pub(crate) fn new(item: MediaItem) -> Self {
        Self {
            item,
            adjustments: ImageAdjustments::default(),
        }
    }

    /// Adjustments being previewed.
    pub fn adjustments_mut(&mut self) -> &mut ImageAdjustments {
        &mut self.adjustments
    }

    pub(crate) fn into_parts(self) -> (MediaItem, ImageAdjustments) {
        (self.item, self.adjustments)
    }
}

/// Where the upload tab is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// Waiting for files
    #[default]
    Idle,
    /// A batch is being transmitted
    Uploading,
    /// One image was uploaded and can be adjusted
    Editing(EditStep),
}

/// State of the upload tab.
#[derive(Debug)]
pub struct UploadPath {
    status: UploadStatus,
    compress: bool,
    dragging: bool,
    rejections: Vec<Rejection>,
    progress: watch::Receiver<u8>,
}

impl Default for UploadPath {
    fn default() -> Self {
        let (_, progress) = watch::channel(0);
        Self {
            status: UploadStatus::Idle,
            compress: true,
            dragging: false,
            rejections: Vec::new(),
            progress,
        }
    }
}

impl UploadPath {
    /// Lifecycle state.
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// A batch is in flight.
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Ask the backend to recompress images (default on).
    pub fn compress(&self) -> bool {
        self.compress
    }

    /// Toggle recompression for the next batch.
    pub fn set_compress(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Files are being dragged over the drop zone.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag enter / leave.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Files refused from the latest batch.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Aggregate progress of the current batch, 0..=100.
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// Subscribe to progress changes of the current batch.
    pub fn progress_receiver(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Split a batch into files to send and files refused locally.
    pub(crate) fn screen(
        &mut self,
        files: Vec<UploadFile>,
        accept: &AcceptFilter,
        max_bytes: u64,
    ) -> Vec<UploadFile> {
        self.rejections.clear();
        let mut valid = Vec::with_capacity(files.len());
        for file in files {
            let kind = if file.size() > max_bytes {
                Some(ValidationErrorKind::FileTooLarge {
                    filename: file.filename().clone(),
                    size: file.size(),
                    limit: max_bytes,
                })
            } else if !accept.matches(file.mime_type()) {
                Some(ValidationErrorKind::UnsupportedType {
                    filename: file.filename().clone(),
                    file_type: file.mime_type().clone(),
                })
            } else {
                None
            };
            match kind {
                Some(kind) => {
                    tracing::debug!(filename = %file.filename(), "Rejected upload");
                    self.rejections.push(Rejection {
                        filename: file.filename().clone(),
                        error: ValidationError::new(kind),
                    });
                }
                None => valid.push(file),
            }
        }
        valid
    }

    /// Enter the uploading state and open a fresh progress channel.
    pub(crate) fn start(&mut self) -> watch::Sender<u8> {
        let (tx, rx) = watch::channel(0);
        self.progress = rx;
        self.status = UploadStatus::Uploading;
        tx
    }

    pub(crate) fn fail(&mut self) {
        self.status = UploadStatus::Idle;
        let (_, rx) = watch::channel(0);
        self.progress = rx;
    }

    pub(crate) fn set_status(&mut self, status: UploadStatus) {
        self.status = status;
    }

    pub(crate) fn edit_step_mut(&mut self) -> Option<&mut EditStep> {
        match &mut self.status {
            UploadStatus::Editing(step) => Some(step),
            _ => None,
        }
    }

    pub(crate) fn take_edit_step(&mut self) -> Option<EditStep> {
        match std::mem::take(&mut self.status) {
            UploadStatus::Editing(step) => Some(step),
            other => {
                self.status = other;
                None
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Percentage for `completed` whole files plus a fraction of the next one.
fn batch_percent(completed: usize, fraction: f64, total: usize) -> u8 {
    let value = (completed as f64 + fraction.clamp(0.0, 1.0)) / total as f64 * 100.0;
    value.round().clamp(0.0, 100.0) as u8
}

/// A validated batch detached from the picker.
#[derive(Debug)]
pub struct UploadJob<S> {
    ticket: Ticket,
    store: Arc<S>,
    files: Vec<UploadFile>,
    compress: bool,
    progress: watch::Sender<u8>,
}

/// Result of an [`UploadJob`].
#[derive(Debug)]
pub struct UploadDone {
    pub(crate) ticket: Ticket,
    pub(crate) result: VitrineResult<Vec<MediaItem>>,
}

impl<S: MediaStore> UploadJob<S> {
    pub(crate) fn new(
        ticket: Ticket,
        store: Arc<S>,
        files: Vec<UploadFile>,
        compress: bool,
        progress: watch::Sender<u8>,
    ) -> Self {
        Self {
            ticket,
            store,
            files,
            compress,
            progress,
        }
    }

    /// Files that passed validation.
    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    /// Send the files one after another.
    ///
    /// Progress only moves forward: after file `i` of `n` completes it is
    /// exactly `round(i / n * 100)`, and the first failure aborts the batch.
    #[tracing::instrument(skip(self), fields(session = self.ticket.session(), files = self.files.len()))]
    pub async fn run(self) -> UploadDone {
        let result = self.send_all().await;
        UploadDone {
            ticket: self.ticket,
            result,
        }
    }

    async fn send_all(&self) -> VitrineResult<Vec<MediaItem>> {
        let total = self.files.len();
        let advance = |percent: u8| {
            self.progress.send_if_modified(|current| {
                if percent > *current {
                    *current = percent;
                    true
                } else {
                    false
                }
            });
        };

        let mut uploaded = Vec::with_capacity(total);
        for (index, file) in self.files.iter().enumerate() {
            let on_progress = |sent: u64, bytes: u64| {
                let fraction = if bytes == 0 {
                    1.0
                } else {
                    sent as f64 / bytes as f64
                };
                advance(batch_percent(index, fraction, total));
            };
            let item = self
                .store
                .upload(file, self.compress, &on_progress)
                .await
                .map_err(|e| {
                    tracing::error!(filename = %file.filename(), error = %e, "Upload failed");
                    e
                })?;
            tracing::debug!(filename = %file.filename(), url = %item.url, "Uploaded");
            advance(batch_percent(index + 1, 0.0, total));
            uploaded.push(item);
        }
        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_percent_rounds_to_file_boundaries() {
        assert_eq!(batch_percent(1, 0.0, 3), 33);
        assert_eq!(batch_percent(2, 0.0, 3), 67);
        assert_eq!(batch_percent(2, 1.0, 3), 100);
        assert_eq!(batch_percent(0, 0.5, 1), 50);
    }

    #[test]
    fn screening_keeps_valid_files_and_records_rejections() {
        let mut path = UploadPath::default();
        let files = vec![
            UploadFile::new("exact.png", "image/png", vec![0u8; 10]),
            UploadFile::new("big.png", "image/png", vec![0u8; 11]),
            UploadFile::new("doc.pdf", "application/pdf", vec![0u8; 1]),
        ];
        let valid = path.screen(files, &AcceptFilter::parse("image/*"), 10);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].filename(), "exact.png");
        let refused: Vec<_> = path.rejections().iter().map(|r| r.filename().as_str()).collect();
        assert_eq!(refused, ["big.png", "doc.pdf"]);
    }

    #[test]
    fn rejection_messages_name_the_file() {
        let mut path = UploadPath::default();
        let files = vec![
            UploadFile::new("big.mp4", "video/mp4", vec![0u8; 11]),
            UploadFile::new("doc.pdf", "application/pdf", vec![0u8; 1]),
        ];
        path.screen(files, &AcceptFilter::parse("video/*"), 10);
        let messages: Vec<_> = path.rejections().iter().map(Rejection::message).collect();
        assert_eq!(
            messages,
            [
                "big.mp4 excede o tamanho máximo de 10 bytes",
                "doc.pdf: tipo de arquivo não suportado (application/pdf)",
            ]
        );

        let limit = 2 * MEGABYTE;
        path.screen(
            vec![UploadFile::new("huge.png", "image/png", vec![0u8; limit as usize + 1])],
            &AcceptFilter::parse("image/*"),
            limit,
        );
        assert_eq!(
            path.rejections()[0].message(),
            "huge.png excede o tamanho máximo de 2MB"
        );
    }
}
