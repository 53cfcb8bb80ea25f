//! Media library endpoints.

use crate::ApiClient;
use crate::client::{Auth, transport_error};
use bytes::Bytes;
use futures::stream;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tokio::sync::watch;
use tracing::instrument;
use vitrine_core::{MediaItem, UploadedMedia};
use vitrine_error::{HttpError, HttpErrorKind, VitrineResult};
use vitrine_storage::{MediaStore, ProgressFn, UploadFile};

const UPLOAD_CHUNK: usize = 64 * 1024;

impl ApiClient {
    /// List uploaded media, optionally restricted to one folder.
    #[instrument(skip(self))]
    pub async fn list_media(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>> {
        let mut req = self.request(Method::GET, "/media", Auth::Bearer);
        if let Some(folder) = folder {
            req = req.query(&[("folder", folder)]);
        }
        let items: Vec<MediaItem> = Self::decode(self.send(req).await?).await?;
        tracing::debug!(count = items.len(), "Listed media");
        Ok(items)
    }

    /// Upload one file as multipart `file` plus the `compress` flag.
    ///
    /// The body is streamed in chunks; `on_progress` receives
    /// `(bytes_sent, bytes_total)` as chunks are handed to the transport.
    #[instrument(skip(self, file, on_progress), fields(filename = %file.filename(), size = file.size()))]
    pub async fn upload_media(
        &self,
        file: &UploadFile,
        folder: Option<&str>,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem> {
        let total = file.size();
        let (sent_tx, mut sent_rx) = watch::channel(0u64);

        let data = file.data().clone();
        let chunks: Vec<Bytes> = (0..data.len())
            .step_by(UPLOAD_CHUNK)
            .map(|start| data.slice(start..(start + UPLOAD_CHUNK).min(data.len())))
            .collect();
        let body = stream::iter(chunks.into_iter().map(move |chunk| {
            sent_tx.send_modify(|sent| *sent += chunk.len() as u64);
            Ok::<Bytes, std::io::Error>(chunk)
        }));

        let part = Part::stream_with_length(reqwest::Body::wrap_stream(body), total)
            .file_name(file.filename().clone())
            .mime_str(file.mime_type())
            .map_err(|e| {
                tracing::error!("Invalid MIME type: {}", e);
                HttpError::new(HttpErrorKind::Request(format!("Invalid MIME type: {}", e)))
            })?;
        let form = Form::new()
            .part("file", part)
            .text("compress", compress.to_string());

        let mut req = self
            .request(Method::POST, "/media/upload", Auth::Bearer)
            .multipart(form);
        if let Some(folder) = folder {
            req = req.query(&[("folder", folder)]);
        }

        let send = req.send();
        tokio::pin!(send);
        let mut listening = true;
        let result = loop {
            tokio::select! {
                result = &mut send => break result,
                changed = sent_rx.changed(), if listening => {
                    if changed.is_ok() {
                        let sent = *sent_rx.borrow_and_update();
                        on_progress(sent, total);
                    } else {
                        listening = false;
                    }
                }
            }
        };
        let response = result.map_err(|e| {
            tracing::error!("Upload failed: {}", e);
            transport_error(&e)
        })?;
        let response = self.check_response(response).await?;
        on_progress(total, total);

        let uploaded: UploadedMedia = Self::decode(response).await?;
        tracing::info!(id = %uploaded.file.id, url = %uploaded.file.url, "Uploaded media");
        Ok(uploaded.file)
    }

    /// Delete a media item.
    #[instrument(skip(self))]
    pub async fn delete_media(&self, id: &str) -> VitrineResult<()> {
        self.send_ack(Method::DELETE, &format!("/media/{}", id), Auth::Bearer)
            .await?;
        tracing::info!("Deleted media");
        Ok(())
    }
}

#[async_trait::async_trait]
impl MediaStore for ApiClient {
    async fn list(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>> {
        self.list_media(folder).await
    }

    async fn upload(
        &self,
        file: &UploadFile,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem> {
        self.upload_media(file, None, compress, on_progress).await
    }

    async fn delete(&self, id: &str) -> VitrineResult<()> {
        self.delete_media(id).await
    }
}
