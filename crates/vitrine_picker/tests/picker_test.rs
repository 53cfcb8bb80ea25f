//! Behavior of the media picker against in-memory stores.

use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use vitrine_core::MediaItem;
use vitrine_error::VitrineResult;
use vitrine_picker::{
    MAX_UPLOAD_BYTES, MediaPicker, PickedMedia, PickerConfig, PickerOutcome, SortOrder, Tab,
    UploadStatus, filter_and_sort,
};
use vitrine_storage::{MediaStore, MemoryMediaStore, ProgressFn, UploadFile};

type Outcomes = Arc<Mutex<Vec<PickerOutcome>>>;

fn item(id: &str, filename: &str, mime: &str, size: Option<u64>, day: u32) -> MediaItem {
    MediaItem {
        id: id.into(),
        filename: filename.into(),
        url: format!("https://cdn.example.com/{}", filename),
        file_type: mime.into(),
        size,
        folder: Some("general".into()),
        created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
    }
}

fn picker_with<S: MediaStore>(store: Arc<S>, multiple: bool, accept: &str) -> (MediaPicker<S>, Outcomes) {
    let outcomes: Outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = outcomes.clone();
    let config = PickerConfig::builder()
        .accept(accept)
        .multiple(multiple)
        .build()
        .unwrap();
    let picker = MediaPicker::new(store, config, move |outcome| sink.lock().unwrap().push(outcome));
    (picker, outcomes)
}

fn library_items() -> Vec<MediaItem> {
    vec![
        item("b", "b.png", "image/png", Some(100), 1),
        item("a", "a.png", "image/png", Some(300), 2),
        item("v", "intro.mp4", "video/mp4", None, 3),
    ]
}

/// Records the picker's progress value each time a file starts uploading.
struct ProgressProbe {
    inner: MemoryMediaStore,
    progress: Mutex<Option<watch::Receiver<u8>>>,
    seen: Mutex<Vec<u8>>,
}

#[async_trait::async_trait]
impl MediaStore for ProgressProbe {
    async fn list(&self, folder: Option<&str>) -> VitrineResult<Vec<MediaItem>> {
        self.inner.list(folder).await
    }

    async fn upload(
        &self,
        file: &UploadFile,
        compress: bool,
        on_progress: &ProgressFn<'_>,
    ) -> VitrineResult<MediaItem> {
        if let Some(rx) = self.progress.lock().unwrap().as_ref() {
            self.seen.lock().unwrap().push(*rx.borrow());
        }
        self.inner.upload(file, compress, on_progress).await
    }

    async fn delete(&self, id: &str) -> VitrineResult<()> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn progress_lands_on_file_boundaries_and_ends_at_100() {
    let store = Arc::new(ProgressProbe {
        inner: MemoryMediaStore::new(),
        progress: Mutex::new(None),
        seen: Mutex::new(Vec::new()),
    });
    let (mut picker, outcomes) = picker_with(store.clone(), true, "video/*");
    picker.open();

    let files = (0..3)
        .map(|i| UploadFile::new(format!("clip{i}.mp4"), "video/mp4", vec![0u8; 1000]))
        .collect();
    let job = picker.on_browse(files).unwrap();
    let progress = picker.upload().progress_receiver();
    *store.progress.lock().unwrap() = Some(progress.clone());
    assert!(picker.upload().is_uploading());

    let done = job.run().await;
    assert_eq!(*store.seen.lock().unwrap(), vec![0, 33, 67]);
    assert_eq!(*progress.borrow(), 100);

    picker.finish_upload(done);
    assert!(!picker.is_open());
    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].media().urls().len(), 3);
}

#[tokio::test]
async fn size_gate_is_inclusive_at_50_mb() {
    let store = Arc::new(MemoryMediaStore::new());
    let (mut picker, outcomes) = picker_with(store.clone(), true, "video/*");
    picker.open();

    let exact = UploadFile::new("exact.mp4", "video/mp4", vec![0u8; MAX_UPLOAD_BYTES as usize]);
    let over = UploadFile::new("over.mp4", "video/mp4", vec![0u8; MAX_UPLOAD_BYTES as usize + 1]);
    picker.upload_files(vec![exact, over]).await;

    assert_eq!(store.upload_log(), vec![("exact.mp4".to_string(), true)]);
    let notes = picker.drain_notifications();
    assert!(notes.iter().any(|n| n.is_error() && n.message().contains("over.mp4")));
    assert_eq!(outcomes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unaccepted_types_are_refused_per_file() {
    let store = Arc::new(MemoryMediaStore::new());
    let (mut picker, outcomes) = picker_with(store.clone(), false, "image/*");
    picker.open();

    picker
        .upload_files(vec![UploadFile::new("notes.pdf", "application/pdf", vec![1u8])])
        .await;

    assert!(store.upload_log().is_empty());
    assert_eq!(picker.upload().rejections().len(), 1);
    let notes = picker.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert_eq!(
        notes[0].message(),
        "notes.pdf: tipo de arquivo não suportado (application/pdf)"
    );
    assert!(picker.is_open());
    assert!(outcomes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn single_mode_click_resolves_with_item_url() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, outcomes) = picker_with(store, false, "image/*,video/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;

    picker.click_item("a");
    assert!(!picker.is_open());
    let outcomes = outcomes.lock().unwrap();
    assert_eq!(
        outcomes[0].media(),
        &PickedMedia::Single("https://cdn.example.com/a.png".into())
    );
    assert!(outcomes[0].adjustments().is_none());
}

#[tokio::test]
async fn multiple_mode_resolves_in_list_order_not_click_order() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, outcomes) = picker_with(store, true, "image/*,video/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;
    picker.library_mut().set_sort(SortOrder::Name);

    picker.click_item("b");
    picker.click_item("a");
    assert_eq!(picker.library().selected_count(), 2);
    picker.confirm_selection();

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(
        outcomes[0].media(),
        &PickedMedia::Multiple(vec![
            "https://cdn.example.com/a.png".into(),
            "https://cdn.example.com/b.png".into(),
        ])
    );
}

#[tokio::test]
async fn confirming_an_empty_selection_keeps_the_picker_open() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, outcomes) = picker_with(store, true, "image/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;

    picker.confirm_selection();
    assert!(picker.is_open());
    assert!(picker.notifications().last().unwrap().is_error());
    assert!(outcomes.lock().unwrap().is_empty());
}

#[test]
fn filter_then_sort_composition() {
    let items = vec![
        item("b", "b.png", "image/png", Some(100), 1),
        item("a", "a.png", "image/png", Some(300), 2),
    ];
    let names = |sort, search: &str| -> Vec<String> {
        filter_and_sort(&items, search, Default::default(), sort)
            .iter()
            .map(|i| i.filename.clone())
            .collect()
    };
    assert_eq!(names(SortOrder::Name, ""), ["a.png", "b.png"]);
    assert_eq!(names(SortOrder::Size, ""), ["a.png", "b.png"]);
    assert_eq!(names(SortOrder::Recent, ""), ["a.png", "b.png"]);
    assert_eq!(names(SortOrder::Name, "a"), ["a.png"]);
}

#[tokio::test]
async fn url_submission_passes_through_trimmed() {
    for (input, expected) in [("https://x.io/s.png", "https://x.io/s.png"), ("  https://x.io/s.png  ", "https://x.io/s.png")] {
        let (mut picker, outcomes) =
            picker_with(Arc::new(MemoryMediaStore::new()), false, "image/*");
        picker.open();
        picker.select_tab(Tab::Url);
        picker.external_mut().set_input(input);
        picker.submit_url();
        assert_eq!(
            outcomes.lock().unwrap()[0].media(),
            &PickedMedia::Single(expected.into())
        );
    }
}

#[tokio::test]
async fn empty_url_is_rejected_without_state_change() {
    let (mut picker, outcomes) = picker_with(Arc::new(MemoryMediaStore::new()), false, "image/*");
    picker.open();
    picker.external_mut().set_input("   ");
    picker.submit_url();
    assert!(picker.is_open());
    assert_eq!(picker.external().input(), "   ");
    assert_eq!(picker.notifications().last().unwrap().message(), "Digite uma URL válida");
    assert!(outcomes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_refetches_and_reconciles_selection() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, _) = picker_with(store, true, "image/*,video/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;
    picker.click_item("a");
    picker.click_item("b");

    picker.library_mut().request_delete("a");
    assert_eq!(picker.library().pending_delete().map(|i| i.id.as_str()), Some("a"));
    picker.confirm_delete().await;

    assert!(picker.library().items().iter().all(|i| i.id != "a"));
    assert!(!picker.library().is_selected("a"));
    assert!(picker.library().is_selected("b"));
    assert!(picker.library().pending_delete().is_none());
    assert!(!picker.library().is_deleting());
}

#[tokio::test]
async fn refresh_landing_after_delete_refetch_is_discarded() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, _) = picker_with(store, false, "image/*,video/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;

    let refresh = picker.begin_refresh().unwrap();
    let held = refresh.run().await;

    picker.library_mut().request_delete("a");
    let delete = picker.begin_delete().unwrap();
    let refetch = picker.finish_delete(delete.run().await).unwrap();
    picker.finish_fetch(refetch.run().await);

    picker.finish_fetch(held);

    let ids: Vec<_> = picker.library().items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["b", "v"]);
    assert!(!picker.library().is_loading());
}

#[tokio::test]
async fn failed_delete_keeps_the_item() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, _) = picker_with(store.clone(), false, "image/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;

    store.fail_delete(true);
    picker.library_mut().request_delete("b");
    picker.confirm_delete().await;

    assert!(picker.library().items().iter().any(|i| i.id == "b"));
    assert_eq!(picker.notifications().last().unwrap().message(), "Erro ao excluir arquivo");
}

#[tokio::test]
async fn single_image_upload_offers_edit_then_resolves_with_original() {
    let store = Arc::new(MemoryMediaStore::new());
    let (mut picker, outcomes) = picker_with(store, false, "image/*");
    picker.open();
    picker.upload_mut().set_dragging(true);

    let photo = UploadFile::new("photo.jpg", "image/jpeg", vec![0u8; 2 * 1024 * 1024]);
    picker.drop_files(vec![photo]).await;

    assert!(!picker.upload().is_dragging());
    let url = picker.edit_step().unwrap().item().url.clone();
    assert!(picker.is_open());
    picker.edit_step_mut().unwrap().adjustments_mut().rotate_right();

    picker.use_original();
    assert!(!picker.is_open());
    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].media(), &PickedMedia::Single(url));
    assert!(outcomes[0].adjustments().is_none());
}

#[tokio::test]
async fn applied_edits_travel_with_the_url() {
    let (mut picker, outcomes) = picker_with(Arc::new(MemoryMediaStore::new()), false, "image/*");
    picker.open();
    picker
        .upload_files(vec![UploadFile::new("photo.png", "image/png", vec![0u8; 64])])
        .await;

    let adjustments = picker.edit_step_mut().unwrap().adjustments_mut();
    adjustments.set_brightness(130);
    adjustments.set_contrast(90);
    picker.apply_edits();

    let outcomes = outcomes.lock().unwrap();
    let applied = outcomes[0].adjustments().unwrap();
    assert_eq!(*applied.brightness(), 130);
    assert_eq!(*applied.contrast(), 90);
}

#[tokio::test]
async fn failed_upload_returns_to_idle_without_completion() {
    let store = Arc::new(MemoryMediaStore::new());
    store.fail_upload(true);
    let (mut picker, outcomes) = picker_with(store, false, "image/*");
    picker.open();

    picker
        .upload_files(vec![UploadFile::new("a.png", "image/png", vec![0u8; 8])])
        .await;

    assert_eq!(picker.upload().status(), &UploadStatus::Idle);
    assert_eq!(picker.upload().progress(), 0);
    assert_eq!(picker.notifications().last().unwrap().message(), "Erro ao enviar arquivo(s)");
    assert!(picker.is_open());
    assert!(outcomes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn library_is_fetched_once_per_session() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, _) = picker_with(store.clone(), false, "image/*");
    picker.open();
    assert_eq!(picker.tab(), Tab::Upload);

    assert!(picker.select_tab(Tab::Library).is_some());
    assert!(picker.select_tab(Tab::Upload).is_none());
    assert!(picker.select_tab(Tab::Library).is_none());

    picker.close();
    picker.open();
    assert!(picker.library().items().is_empty());
    assert!(picker.select_tab(Tab::Library).is_some());
}

#[tokio::test]
async fn late_results_after_reopen_are_ignored() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    let (mut picker, outcomes) = picker_with(store.clone(), false, "image/*");

    picker.open();
    let fetch = picker.select_tab(Tab::Library).unwrap();
    let upload = picker
        .on_browse(vec![UploadFile::new("late.mp4", "image/png", vec![1u8])])
        .unwrap();
    picker.close();
    picker.open();

    picker.finish_fetch(fetch.run().await);
    picker.finish_upload(upload.run().await);

    assert!(picker.library().items().is_empty());
    assert_eq!(picker.upload().status(), &UploadStatus::Idle);
    assert!(picker.is_open());
    assert!(outcomes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn library_fetch_failure_leaves_an_empty_list() {
    let store = Arc::new(MemoryMediaStore::with_items(library_items()));
    store.fail_list(true);
    let (mut picker, _) = picker_with(store, false, "image/*");
    picker.open();
    picker.activate_tab(Tab::Library).await;

    assert!(picker.library().items().is_empty());
    assert!(!picker.library().is_loading());
}
