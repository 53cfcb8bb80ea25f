//! File-backed session persistence.

use tempfile::TempDir;
use vitrine_client::{FileSessionStore, Session, SessionStore};
use vitrine_core::User;

#[tokio::test]
async fn session_survives_save_and_restore() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp_dir.path().join("nested/session.json"));
    assert!(store.load().await.unwrap().is_none());

    let session = Session::new();
    session.set_token("opaque");
    session.set_user(User {
        email: "admin@example.com".into(),
        name: "Admin".into(),
        role: "admin".into(),
    });
    store.save(&session.snapshot().unwrap()).await.unwrap();

    let restored = Session::new();
    restored.restore(store.load().await.unwrap().unwrap());
    assert_eq!(restored.token().as_deref(), Some("opaque"));
    assert!(restored.is_authenticated());
    assert_eq!(restored.user().map(|u| u.name), Some("Admin".to_string()));

    store.clear().await.unwrap();
    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
}

#[test]
fn signed_out_session_has_no_snapshot() {
    assert!(Session::new().snapshot().is_none());
}
