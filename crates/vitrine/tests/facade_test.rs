//! The facade wires the picker to a media store.

use std::sync::{Arc, Mutex};
use vitrine::{
    LoggingConfig, MediaPicker, MediaStore, MemoryMediaStore, PickerConfig, PickerOutcome, Tab,
    UploadFile,
};

#[tokio::test]
async fn picker_uploads_into_the_store_library() {
    let store = Arc::new(MemoryMediaStore::new());

    let outcomes: Arc<Mutex<Vec<PickerOutcome>>> = Arc::default();
    let sink = outcomes.clone();
    let config = PickerConfig::builder().accept("video/*").build().unwrap();
    let mut picker = MediaPicker::new(store.clone(), config, move |outcome| {
        sink.lock().unwrap().push(outcome)
    });

    picker.open();
    picker
        .upload_files(vec![UploadFile::new("intro.mp4", "video/mp4", vec![7u8; 2048])])
        .await;

    let urls: Vec<String> = outcomes.lock().unwrap()[0]
        .media()
        .urls()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("/uploads/general/"));
    assert!(urls[0].ends_with("intro.mp4"));
    assert!(!picker.is_open());

    let stored = store.list(None).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].url, urls[0]);

    picker.open();
    picker.activate_tab(Tab::Library).await;
    assert_eq!(picker.library().visible().len(), 1);
}

#[test]
fn logging_config_defaults_to_text() {
    let config = LoggingConfig::new("debug");
    assert_eq!(config.log_level, "debug");
    assert!(!config.json_logs);
    assert!(config.with_json_logs(true).json_logs);
}
