//! HTTP behavior of the API client against a mock backend.

use mockito::{Matcher, Server};
use std::sync::Mutex;
use vitrine_client::{ApiClient, ClientConfig};
use vitrine_core::{AreaDraft, ContactMessageDraft, Credentials};
use vitrine_error::{HttpErrorKind, VitrineErrorKind};
use vitrine_storage::{MediaStore, UploadFile};

const TOKEN_BODY: &str = r#"{"access_token": "tok-123", "token_type": "bearer",
    "user": {"email": "admin@example.com", "name": "Admin", "role": "admin"}}"#;

const MEDIA_ITEM: &str = r#"{"id": "m1", "filename": "hero.png", "url": "https://cdn.example.com/hero.png",
    "file_type": "image/png", "size": 3, "folder": "general",
    "created_at": "2024-05-02T12:00:00.123456+00:00"}"#;

fn client_for(server: &Server) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.url()).with_timeout_secs(5)).unwrap()
}

async fn signed_in(server: &mut Server) -> ApiClient {
    server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "admin@example.com",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .create_async()
        .await;
    let client = client_for(server);
    let user = client
        .login(&Credentials::new("admin@example.com", "secret"))
        .await
        .unwrap();
    assert_eq!(user.role, "admin");
    client
}

#[tokio::test]
async fn public_settings_fetch_sends_no_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/settings")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "site_settings", "default_language": "es"}"#)
        .create_async()
        .await;

    let settings = client_for(&server).get_settings().await.unwrap();
    assert_eq!(settings.default_language.code(), "es");
    assert_eq!(settings.hero.title_size, 48);
    mock.assert_async().await;
}

#[tokio::test]
async fn login_token_is_attached_to_privileged_calls() {
    let mut server = Server::new_async().await;
    let client = signed_in(&mut server).await;
    assert!(client.session().is_authenticated());

    let mock = server
        .mock("GET", "/api/media")
        .match_header("authorization", "Bearer tok-123")
        .match_query(Matcher::UrlEncoded("folder".into(), "logos".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", MEDIA_ITEM))
        .create_async()
        .await;

    let items = client.list(Some("logos")).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_image());
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let mut server = Server::new_async().await;
    let client = signed_in(&mut server).await;

    server
        .mock("GET", "/api/stats/dashboard")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Invalid token"}"#)
        .create_async()
        .await;

    let err = client.dashboard_stats().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(client.session().token().is_none());
    assert!(client.session().user().is_none());
}

#[tokio::test]
async fn missing_post_is_not_found_with_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/blog/no-such-post")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Post not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_post("no-such-post").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Post not found"));
}

#[tokio::test]
async fn upload_streams_multipart_with_compress_flag() {
    let mut server = Server::new_async().await;
    let client = signed_in(&mut server).await;

    let mock = server
        .mock("POST", "/api/media/upload")
        .match_header("authorization", "Bearer tok-123")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="hero.png""#.into()),
            Matcher::Regex(r#"name="compress"\r\n\r\nfalse"#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"message": "File uploaded", "file": {}}}"#, MEDIA_ITEM))
        .create_async()
        .await;

    let file = UploadFile::new("hero.png", "image/png", vec![1u8, 2, 3]);
    let ticks = Mutex::new(Vec::new());
    let item = client
        .upload(&file, false, &|sent, total| ticks.lock().unwrap().push((sent, total)))
        .await
        .unwrap();

    assert_eq!(item.url, "https://cdn.example.com/hero.png");
    let ticks = ticks.into_inner().unwrap();
    assert_eq!(ticks.last(), Some(&(3, 3)));
    assert!(ticks.windows(2).all(|w| w[0].0 <= w[1].0));
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let mut server = Server::new_async().await;
    let client = signed_in(&mut server).await;
    server
        .mock("POST", "/api/areas")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let draft = AreaDraft::builder().title("Agro").description("Grãos").build().unwrap();
    let err = client.create_area(&draft).await.unwrap_err();
    match err.kind() {
        VitrineErrorKind::Http(http) => {
            assert!(matches!(http.kind, HttpErrorKind::Status { status: 500, .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn contact_form_is_public() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::PartialJson(serde_json::json!({"name": "Ana", "message": "Olá"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "c1", "name": "Ana", "email": "ana@example.com", "message": "Olá",
                "is_read": false, "created_at": "2024-01-01T00:00:00+00:00"}"#,
        )
        .create_async()
        .await;

    let draft = ContactMessageDraft {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        message: "Olá".into(),
        ..Default::default()
    };
    let message = client_for(&server).submit_contact(&draft).await.unwrap();
    assert_eq!(message.id, "c1");
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9").with_timeout_secs(2)).unwrap();
    let err = client.list_areas().await.unwrap_err();
    match err.kind() {
        VitrineErrorKind::Http(http) => assert!(matches!(
            http.kind,
            HttpErrorKind::Request(_) | HttpErrorKind::Timeout(_)
        )),
        other => panic!("unexpected error: {other}"),
    }
}
