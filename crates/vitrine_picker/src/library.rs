//! Library tab: previously uploaded media.

use crate::Ticket;
use std::cmp::Ordering;
use std::sync::Arc;
use vitrine_core::{MediaItem, MediaKind};
use vitrine_error::VitrineResult;
use vitrine_storage::MediaStore;

/// Type filter over `file_type`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum TypeFilter {
    /// Everything
    #[default]
    #[display("Todos")]
    All,
    /// `image/*` only
    #[display("Imagens")]
    Images,
    /// `video/*` only
    #[display("Vídeos")]
    Videos,
}

impl TypeFilter {
    /// True when the item passes this filter.
    pub fn admits(&self, item: &MediaItem) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Images => item.kind() == MediaKind::Image,
            TypeFilter::Videos => item.kind() == MediaKind::Video,
        }
    }
}

/// Sort order of the library list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum SortOrder {
    /// Newest first
    #[default]
    #[display("Mais recentes")]
    Recent,
    /// Filename A to Z, ignoring case
    #[display("Nome")]
    Name,
    /// Largest first, unknown sizes last
    #[display("Tamanho")]
    Size,
}

impl SortOrder {
    fn compare(&self, a: &MediaItem, b: &MediaItem) -> Ordering {
        match self {
            SortOrder::Recent => b.created_at.cmp(&a.created_at),
            SortOrder::Name => a.filename.to_lowercase().cmp(&b.filename.to_lowercase()),
            SortOrder::Size => b.size.unwrap_or(0).cmp(&a.size.unwrap_or(0)),
        }
    }
}

/// Grid of thumbnails or a detailed list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum ViewMode {
    /// Thumbnails
    #[default]
    #[display("grid")]
    Grid,
    /// Rows with size and date
    #[display("list")]
    List,
}

/// Filter by search text and type, then sort. The sort is stable.
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// use vitrine_core::MediaItem;
/// use vitrine_picker::{SortOrder, TypeFilter, filter_and_sort};
///
/// let item = |id: &str, name: &str, mime: &str, size: Option<u64>| MediaItem {
///     id: id.into(), filename: name.into(), url: format!("/u/{id}"), file_type: mime.into(),
///     size, folder: None, created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
/// };
/// let items = vec![
///     item("a", "Logo.png", "image/png", Some(10)),
///     item("b", "intro.mp4", "video/mp4", Some(99)),
///     item("c", "logo-dark.png", "image/png", None),
/// ];
/// let visible = filter_and_sort(&items, "LOGO", TypeFilter::Images, SortOrder::Size);
/// let ids: Vec<_> = visible.iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, ["a", "c"]);
/// ```
pub fn filter_and_sort<'a>(
    items: &'a [MediaItem],
    search: &str,
    type_filter: TypeFilter,
    sort: SortOrder,
) -> Vec<&'a MediaItem> {
    let needle = search.trim().to_lowercase();
    let mut visible: Vec<&MediaItem> = items
        .iter()
        .filter(|item| needle.is_empty() || item.filename.to_lowercase().contains(&needle))
        .filter(|item| type_filter.admits(item))
        .collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// State of the library tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryPath {
    items: Vec<MediaItem>,
    fetched: bool,
    loading: bool,
    generation: u64,
    search: String,
    type_filter: TypeFilter,
    sort: SortOrder,
    view: ViewMode,
    selection: Vec<String>,
    pending_delete: Option<String>,
    deleting: bool,
}

impl LibraryPath {
    /// Every fetched item, in server order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// A fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A delete is in flight.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Type filter.
    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter
    }

    /// Replace the type filter.
    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.type_filter = filter;
    }

    /// Sort order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Replace the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// View mode.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Replace the view mode.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Items to display: filtered, then sorted.
    pub fn visible(&self) -> Vec<&MediaItem> {
        filter_and_sort(&self.items, &self.search, self.type_filter, self.sort)
    }

    /// True when the item is in the multi-selection.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|selected| selected == id)
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub(crate) fn toggle(&mut self, id: &str) {
        if let Some(position) = self.selection.iter().position(|selected| selected == id) {
            self.selection.remove(position);
        } else if self.items.iter().any(|item| item.id == id) {
            self.selection.push(id.to_string());
        }
    }

    pub(crate) fn find(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// URLs of the selected items in display order.
    ///
    /// Visible items come first in list order; selected items hidden by the
    /// current search or type filter follow in sort order.
    pub fn selected_urls(&self) -> Vec<String> {
        let visible = self.visible();
        let mut hidden: Vec<&MediaItem> = self
            .items
            .iter()
            .filter(|item| !visible.iter().any(|v| v.id == item.id))
            .collect();
        hidden.sort_by(|a, b| self.sort.compare(a, b));

        visible
            .into_iter()
            .chain(hidden)
            .filter(|item| self.is_selected(&item.id))
            .map(|item| item.url.clone())
            .collect()
    }

    /// Item awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&MediaItem> {
        self.pending_delete.as_deref().and_then(|id| self.find(id))
    }

    /// Ask for confirmation before deleting an item.
    pub fn request_delete(&mut self, id: &str) {
        if self.find(id).is_some() {
            self.pending_delete = Some(id.to_string());
        }
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub(crate) fn needs_fetch(&self) -> bool {
        !self.fetched && !self.loading
    }

    /// Mark a fetch as started and return its generation. Only the most
    /// recently started fetch may replace the items.
    pub(crate) fn start_fetch(&mut self) -> u64 {
        self.fetched = true;
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Apply a fetch result. Returns `false` when a newer fetch superseded it.
    pub(crate) fn apply_fetch(
        &mut self,
        generation: u64,
        result: VitrineResult<Vec<MediaItem>>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "Ignoring superseded fetch");
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Library fetched");
                self.items = items;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch media library");
                self.items.clear();
            }
        }
        let items = &self.items;
        self.selection.retain(|id| items.iter().any(|item| &item.id == id));
        if self.pending_delete.as_deref().is_some_and(|id| !items.iter().any(|item| item.id == id)) {
            self.pending_delete = None;
        }
        true
    }

    pub(crate) fn take_pending_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    pub(crate) fn finish_delete(&mut self, id: &str, deleted: bool) {
        self.deleting = false;
        if deleted {
            self.selection.retain(|selected| selected != id);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Forget everything fetched in the session; keep the view mode.
    pub(crate) fn reset(&mut self) {
        *self = Self {
            view: self.view,
            generation: self.generation,
            ..Self::default()
        };
    }
}

/// A library fetch detached from the picker.
#[derive(Debug)]
pub struct FetchJob<S> {
    ticket: Ticket,
    generation: u64,
    store: Arc<S>,
}

/// Result of a [`FetchJob`], to hand back to the picker.
#[derive(Debug)]
pub struct FetchDone {
    pub(crate) ticket: Ticket,
    pub(crate) generation: u64,
    pub(crate) result: VitrineResult<Vec<MediaItem>>,
}

impl<S: MediaStore> FetchJob<S> {
    pub(crate) fn new(ticket: Ticket, generation: u64, store: Arc<S>) -> Self {
        Self {
            ticket,
            generation,
            store,
        }
    }

    /// Fetch the full collection.
    #[tracing::instrument(
        skip(self),
        fields(session = self.ticket.session(), generation = self.generation)
    )]
    pub async fn run(self) -> FetchDone {
        let result = self.store.list(None).await;
        FetchDone {
            ticket: self.ticket,
            generation: self.generation,
            result,
        }
    }
}

/// A confirmed delete detached from the picker.
#[derive(Debug)]
pub struct DeleteJob<S> {
    ticket: Ticket,
    store: Arc<S>,
    id: String,
}

/// Result of a [`DeleteJob`].
#[derive(Debug)]
pub struct DeleteDone {
    pub(crate) ticket: Ticket,
    pub(crate) id: String,
    pub(crate) result: VitrineResult<()>,
}

impl<S: MediaStore> DeleteJob<S> {
    pub(crate) fn new(ticket: Ticket, store: Arc<S>, id: String) -> Self {
        Self { ticket, store, id }
    }

    /// Id being deleted.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Send the delete request.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub async fn run(self) -> DeleteDone {
        let result = self.store.delete(&self.id).await;
        DeleteDone {
            ticket: self.ticket,
            id: self.id,
            result,
        }
    }
}
