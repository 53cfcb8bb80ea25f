//! Tests for reading upload files from disk.

use vitrine_storage::UploadFile;

#[tokio::test]
async fn test_from_path_reads_bytes_and_guesses_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Banner.WEBP");
    std::fs::write(&path, [1u8, 2, 3, 4, 5]).unwrap();

    let file = UploadFile::from_path(&path).await.unwrap();

    assert_eq!(file.filename(), "Banner.WEBP");
    assert_eq!(file.mime_type(), "image/webp");
    assert_eq!(file.size(), 5);
}

#[tokio::test]
async fn test_from_path_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let err = UploadFile::from_path(&path).await.unwrap_err();

    assert!(err.to_string().contains("missing.png"));
}
