//! The picker shell: open state, tabs, and the contract with the parent.

use crate::{
    DeleteDone, DeleteJob, ExternalPath, FetchDone, FetchJob, LibraryPath, Notification,
    Notifications, PickedMedia, PickerConfig, PickerOutcome, UploadDone, UploadJob, UploadPath,
    UploadStatus, EditStep,
};
use std::sync::Arc;
use vitrine_storage::{MediaStore, UploadFile};

/// Marks asynchronous work with the picker session that started it.
///
/// Results carrying a ticket from an earlier session, or arriving after the
/// picker closed, are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    session: u64,
}

impl Ticket {
    /// Session number the work belongs to.
    pub fn session(&self) -> u64 {
        self.session
    }
}

/// Acquisition path shown in the picker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum Tab {
    /// Local files
    #[default]
    #[display("Upload")]
    Upload,
    /// Pasted external URL
    #[display("URL")]
    Url,
    /// Previously uploaded media
    #[display("Biblioteca")]
    Library,
}

type Completion = Box<dyn FnMut(PickerOutcome) + Send>;

/// Headless media picker.
///
/// The picker owns the state of its three paths and talks to a
/// [`MediaStore`]. Network work is split into a synchronous `begin_*` step
/// that returns a job, the job's `run`, and a `finish_*` step, so a UI can
/// spawn the job and feed the result back later. The `async` convenience
/// methods do all three in sequence.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use vitrine_picker::{MediaPicker, PickedMedia, PickerConfig};
/// use vitrine_storage::MemoryMediaStore;
///
/// let picked = Arc::new(Mutex::new(None));
/// let sink = picked.clone();
/// let mut picker = MediaPicker::new(
///     Arc::new(MemoryMediaStore::new()),
///     PickerConfig::default(),
///     move |outcome| *sink.lock().unwrap() = Some(outcome.into_media()),
/// );
///
/// picker.open();
/// picker.external_mut().set_input("  https://cdn.example.com/a.png ");
/// picker.submit_url();
/// assert!(!picker.is_open());
/// assert_eq!(
///     *picked.lock().unwrap(),
///     Some(PickedMedia::Single("https://cdn.example.com/a.png".into()))
/// );
/// ```
pub struct MediaPicker<S> {
    store: Arc<S>,
    config: PickerConfig,
    open: bool,
    session: u64,
    tab: Tab,
    upload: UploadPath,
    external: ExternalPath,
    library: LibraryPath,
    notifications: Notifications,
    on_complete: Completion,
}

impl<S> std::fmt::Debug for MediaPicker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPicker")
            .field("config", &self.config)
            .field("open", &self.open)
            .field("session", &self.session)
            .field("tab", &self.tab)
            .finish_non_exhaustive()
    }
}

impl<S: MediaStore> MediaPicker<S> {
    /// Create a closed picker. `on_complete` runs once per completed session.
    pub fn new(
        store: Arc<S>,
        config: PickerConfig,
        on_complete: impl FnMut(PickerOutcome) + Send + 'static,
    ) -> Self {
        Self {
            store,
            config,
            open: false,
            session: 0,
            tab: Tab::Upload,
            upload: UploadPath::default(),
            external: ExternalPath::default(),
            library: LibraryPath::default(),
            notifications: Notifications::default(),
            on_complete: Box::new(on_complete),
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the configuration. Ignored while open.
    pub fn set_config(&mut self, config: PickerConfig) {
        if !self.open {
            self.config = config;
        }
    }

    /// The picker is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current session number; increments on every open.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Upload tab state.
    pub fn upload(&self) -> &UploadPath {
        &self.upload
    }

    /// Upload tab state, for toggles such as compression and dragging.
    pub fn upload_mut(&mut self) -> &mut UploadPath {
        &mut self.upload
    }

    /// URL tab state.
    pub fn external(&self) -> &ExternalPath {
        &self.external
    }

    /// URL tab state, for input changes.
    pub fn external_mut(&mut self) -> &mut ExternalPath {
        &mut self.external
    }

    /// Library tab state.
    pub fn library(&self) -> &LibraryPath {
        &self.library
    }

    /// Library tab state, for search, filters and delete confirmation.
    pub fn library_mut(&mut self) -> &mut LibraryPath {
        &mut self.library
    }

    /// Pending notifications.
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Take pending notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Open a new session on the upload tab.
    #[tracing::instrument(skip(self))]
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.session += 1;
        self.open = true;
        self.tab = Tab::Upload;
        tracing::debug!(session = self.session, "Picker opened");
    }

    /// Close, discarding everything the session accumulated.
    #[tracing::instrument(skip(self))]
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.upload.reset();
        self.external.reset();
        self.library.reset();
        tracing::debug!(session = self.session, "Picker closed");
    }

    fn ticket(&self) -> Ticket {
        Ticket {
            session: self.session,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.open && ticket.session == self.session
    }

    /// Hand the result to the parent and close.
    pub fn select_and_close(&mut self, media: PickedMedia) {
        self.complete(PickerOutcome::new(media));
    }

    fn complete(&mut self, outcome: PickerOutcome) {
        if !self.open {
            return;
        }
        tracing::info!(urls = ?outcome.media().urls(), "Picker completed");
        (self.on_complete)(outcome);
        self.close();
    }

    /// Switch tabs. The first library activation in a session returns the
    /// fetch to run.
    pub fn select_tab(&mut self, tab: Tab) -> Option<FetchJob<S>> {
        if !self.open {
            return None;
        }
        self.tab = tab;
        if tab == Tab::Library && self.library.needs_fetch() {
            return Some(self.start_fetch());
        }
        None
    }

    fn start_fetch(&mut self) -> FetchJob<S> {
        let generation = self.library.start_fetch();
        FetchJob::new(self.ticket(), generation, Arc::clone(&self.store))
    }

    /// Explicit refresh of the library.
    pub fn begin_refresh(&mut self) -> Option<FetchJob<S>> {
        if !self.open || self.library.is_loading() {
            return None;
        }
        Some(self.start_fetch())
    }

    /// Apply a finished fetch. A fetch superseded by a later one is dropped.
    pub fn finish_fetch(&mut self, done: FetchDone) {
        if !self.is_current(done.ticket) {
            tracing::debug!(session = done.ticket.session(), "Ignoring stale library response");
            return;
        }
        self.library.apply_fetch(done.generation, done.result);
    }

    /// Switch tabs, fetching the library if this is its first activation.
    pub async fn activate_tab(&mut self, tab: Tab) {
        if let Some(job) = self.select_tab(tab) {
            let done = job.run().await;
            self.finish_fetch(done);
        }
    }

    /// Re-fetch the library.
    pub async fn refresh_library(&mut self) {
        if let Some(job) = self.begin_refresh() {
            let done = job.run().await;
            self.finish_fetch(done);
        }
    }

    /// Files dropped on the drop zone.
    pub fn on_drop(&mut self, files: Vec<UploadFile>) -> Option<UploadJob<S>> {
        self.upload.set_dragging(false);
        self.begin_upload(files)
    }

    /// Files chosen in the file browser.
    pub fn on_browse(&mut self, files: Vec<UploadFile>) -> Option<UploadJob<S>> {
        self.begin_upload(files)
    }

    /// Validate a batch and prepare its transmission.
    ///
    /// Oversized or unaccepted files are refused individually with an error
    /// notification each; the rest proceed.
    #[tracing::instrument(skip(self, files), fields(files = files.len()))]
    pub fn begin_upload(&mut self, files: Vec<UploadFile>) -> Option<UploadJob<S>> {
        if !self.open || files.is_empty() || self.upload.is_uploading() {
            return None;
        }
        let valid = self.upload.screen(
            files,
            self.config.accept(),
            *self.config.max_upload_bytes(),
        );
        for rejection in self.upload.rejections() {
            self.notifications
                .push(Notification::error(rejection.message()));
        }
        if valid.is_empty() {
            return None;
        }
        let progress = self.upload.start();
        Some(UploadJob::new(
            self.ticket(),
            Arc::clone(&self.store),
            valid,
            self.upload.compress(),
            progress,
        ))
    }

    /// Apply a finished upload batch.
    pub fn finish_upload(&mut self, done: UploadDone) {
        if !self.is_current(done.ticket) {
            tracing::debug!(session = done.ticket.session(), "Ignoring stale upload result");
            return;
        }
        match done.result {
            Ok(items) => {
                self.notifications.push(Notification::success(format!(
                    "{} arquivo(s) enviado(s)!",
                    items.len()
                )));
                if items.len() == 1 && items[0].is_image() {
                    let item = items.into_iter().next();
                    if let Some(item) = item {
                        self.upload.set_status(UploadStatus::Editing(EditStep::new(item)));
                    }
                    return;
                }
                self.upload.set_status(UploadStatus::Idle);
                let urls = items.into_iter().map(|item| item.url).collect();
                if let Some(media) = PickedMedia::from_urls(urls, *self.config.multiple()) {
                    self.select_and_close(media);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Upload batch failed");
                self.upload.fail();
                self.notifications
                    .push(Notification::error("Erro ao enviar arquivo(s)"));
            }
        }
    }

    /// Upload files chosen in the file browser and apply the result.
    pub async fn upload_files(&mut self, files: Vec<UploadFile>) {
        if let Some(job) = self.on_browse(files) {
            let done = job.run().await;
            self.finish_upload(done);
        }
    }

    /// Upload dropped files and apply the result.
    pub async fn drop_files(&mut self, files: Vec<UploadFile>) {
        if let Some(job) = self.on_drop(files) {
            let done = job.run().await;
            self.finish_upload(done);
        }
    }

    /// The edit step, when a single image was just uploaded.
    pub fn edit_step(&self) -> Option<&EditStep> {
        match self.upload.status() {
            UploadStatus::Editing(step) => Some(step),
            _ => None,
        }
    }

    /// The edit step, for adjusting rotation, brightness and contrast.
    pub fn edit_step_mut(&mut self) -> Option<&mut EditStep> {
        self.upload.edit_step_mut()
    }

    /// Resolve with the uploaded image, ignoring any adjustments.
    pub fn use_original(&mut self) {
        if let Some(step) = self.upload.take_edit_step() {
            let (item, _) = step.into_parts();
            let media = self.wrap_single(item.url);
            self.complete(PickerOutcome::new(media));
        }
    }

    /// Resolve with the uploaded image and the chosen adjustments.
    ///
    /// Unchanged adjustments resolve exactly like [`use_original`](Self::use_original).
    pub fn apply_edits(&mut self) {
        if let Some(step) = self.upload.take_edit_step() {
            let (item, adjustments) = step.into_parts();
            let media = self.wrap_single(item.url);
            let outcome = if adjustments.is_identity() {
                PickerOutcome::new(media)
            } else {
                PickerOutcome::with_adjustments(media, adjustments)
            };
            self.complete(outcome);
        }
    }

    fn wrap_single(&self, url: String) -> PickedMedia {
        if *self.config.multiple() {
            PickedMedia::Multiple(vec![url])
        } else {
            PickedMedia::Single(url)
        }
    }

    /// Submit the URL tab.
    pub fn submit_url(&mut self) {
        if !self.open {
            return;
        }
        match self.external.submit() {
            Ok(url) => {
                let media = self.wrap_single(url);
                self.select_and_close(media);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected empty URL");
                self.notifications
                    .push(Notification::error("Digite uma URL válida"));
            }
        }
    }

    /// Click on a library item: resolves in single mode, toggles in multiple mode.
    pub fn click_item(&mut self, id: &str) {
        if !self.open {
            return;
        }
        if *self.config.multiple() {
            self.library.toggle(id);
        } else if let Some(item) = self.library.find(id) {
            let url = item.url.clone();
            self.select_and_close(PickedMedia::Single(url));
        }
    }

    /// Resolve with the multi-selection in list order.
    pub fn confirm_selection(&mut self) {
        if !self.open {
            return;
        }
        let urls = self.library.selected_urls();
        match PickedMedia::from_urls(urls, *self.config.multiple()) {
            Some(media) => {
                self.library.clear_selection();
                self.select_and_close(media);
            }
            None => self
                .notifications
                .push(Notification::error("Selecione pelo menos um arquivo")),
        }
    }

    /// Delete the item awaiting confirmation.
    pub fn begin_delete(&mut self) -> Option<DeleteJob<S>> {
        if !self.open {
            return None;
        }
        let id = self.library.take_pending_delete()?;
        Some(DeleteJob::new(self.ticket(), Arc::clone(&self.store), id))
    }

    /// Apply a finished delete. On success returns the refetch to run.
    pub fn finish_delete(&mut self, done: DeleteDone) -> Option<FetchJob<S>> {
        if !self.is_current(done.ticket) {
            tracing::debug!(session = done.ticket.session(), "Ignoring stale delete result");
            return None;
        }
        match done.result {
            Ok(()) => {
                self.library.finish_delete(&done.id, true);
                self.notifications.push(Notification::success("Arquivo excluído!"));
                Some(self.start_fetch())
            }
            Err(e) => {
                tracing::error!(id = %done.id, error = %e, "Delete failed");
                self.library.finish_delete(&done.id, false);
                self.notifications
                    .push(Notification::error("Erro ao excluir arquivo"));
                None
            }
        }
    }

    /// Delete the confirmed item, then re-fetch the library.
    pub async fn confirm_delete(&mut self) {
        let Some(job) = self.begin_delete() else {
            return;
        };
        let done = job.run().await;
        if let Some(refetch) = self.finish_delete(done) {
            let done = refetch.run().await;
            self.finish_fetch(done);
        }
    }
}
