//! Admin editors against a mock backend.

use mockito::{Matcher, Server};
use serde_json::json;
use vitrine_admin::{AreasEditor, BlogEditor, Dashboard, Inbox, REQUIRED_FIELDS, SESSION_EXPIRED, SettingsEditor};
use vitrine_client::{ApiClient, ClientConfig, Session};

const AREAS: &str = r#"[
    {"id": "a2", "title": "Logística", "description": "Frota", "order": 1, "is_active": true},
    {"id": "a1", "title": "Agro", "description": "Grãos", "order": 0, "is_active": true}
]"#;

fn admin_client(server: &Server) -> ApiClient {
    let session = Session::new();
    session.set_token("tok-admin");
    ApiClient::with_session(ClientConfig::new(server.url()).with_timeout_secs(5), session).unwrap()
}

fn message(id: &str, day: u32, is_read: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Ana",
        "email": "ana@example.com",
        "message": "Olá",
        "is_read": is_read,
        "created_at": format!("2024-05-{:02}T10:00:00Z", day),
    })
}

async fn mock_areas(server: &mut Server, hits: usize) -> mockito::Mock {
    server
        .mock("GET", "/api/areas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AREAS)
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn areas_are_sorted_and_new_form_goes_last() {
    let mut server = Server::new_async().await;
    mock_areas(&mut server, 1).await;

    let mut editor = AreasEditor::new(admin_client(&server));
    editor.load().await;
    let ids: Vec<_> = editor.areas().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2"]);

    editor.open_new();
    let form = editor.form().unwrap();
    assert!(form.is_new());
    assert_eq!(form.draft().order, 2);
}

#[tokio::test]
async fn invalid_area_is_not_sent() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/areas")
        .expect(0)
        .create_async()
        .await;

    let mut editor = AreasEditor::new(admin_client(&server));
    editor.open_new();
    editor.form_mut().unwrap().draft_mut().description = "Sem título".into();
    editor.save().await;

    let last = editor.notifications_mut().last().cloned().unwrap();
    assert!(last.is_error());
    assert_eq!(last.message(), REQUIRED_FIELDS);
    assert!(editor.form().is_some());
    create.assert_async().await;
}

#[tokio::test]
async fn specialty_area_is_saved_with_forced_badge() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/areas")
        .match_header("authorization", "Bearer tok-admin")
        .match_body(Matcher::PartialJson(json!({
            "title": "Energia",
            "is_specialty": true,
            "badge_text": "NOSSA ESPECIALIDADE",
            "badge_color": "#D4AF37",
            "overlay_color": "rgba(212, 175, 55, 0.7)"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "a3", "title": "Energia", "description": "Solar", "is_specialty": true}"#)
        .create_async()
        .await;
    let reload = mock_areas(&mut server, 1).await;

    let mut editor = AreasEditor::new(admin_client(&server));
    editor.open_new();
    {
        let draft = editor.form_mut().unwrap().draft_mut();
        draft.title = "Energia".into();
        draft.description = "Solar".into();
    }
    editor.set_specialty(true);
    editor.save().await;

    create.assert_async().await;
    reload.assert_async().await;
    assert!(editor.form().is_none());
    assert_eq!(editor.notifications_mut().last().unwrap().message(), "Área criada!");
}

#[tokio::test]
async fn toggling_sends_the_flipped_flag() {
    let mut server = Server::new_async().await;
    mock_areas(&mut server, 2).await;
    let update = server
        .mock("PUT", "/api/areas/a1")
        .match_body(Matcher::PartialJson(json!({"is_active": false, "title": "Agro"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "a1", "title": "Agro", "description": "Grãos", "is_active": false}"#)
        .create_async()
        .await;

    let mut editor = AreasEditor::new(admin_client(&server));
    editor.load().await;
    editor.toggle_active("a1").await;

    update.assert_async().await;
    assert_eq!(editor.notifications_mut().last().unwrap().message(), "Área desativada");
}

#[tokio::test]
async fn delete_waits_for_confirmation() {
    let mut server = Server::new_async().await;
    mock_areas(&mut server, 2).await;
    let delete = server
        .mock("DELETE", "/api/areas/a2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Area deleted"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut editor = AreasEditor::new(admin_client(&server));
    editor.load().await;

    editor.confirm_delete().await;
    editor.request_delete("a2");
    assert_eq!(editor.pending_delete().unwrap().id, "a2");
    editor.confirm_delete().await;

    delete.assert_async().await;
    assert!(editor.pending_delete().is_none());
    assert_eq!(editor.notifications_mut().last().unwrap().message(), "Área excluída!");
}

#[tokio::test]
async fn blog_save_parses_the_tags_field() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/blog")
        .match_body(Matcher::PartialJson(json!({"tags": ["rust", "web"], "is_published": true})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "p1", "slug": "olá-mundo", "title": "Olá Mundo", "excerpt": "e",
                "content": "c", "tags": ["rust", "web"], "created_at": "2024-05-01T10:00:00Z"}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/api/blog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let mut editor = BlogEditor::new(admin_client(&server));
    editor.open_new();
    let form = editor.form_mut().unwrap();
    form.draft_mut().title = "Olá Mundo".into();
    form.draft_mut().excerpt = "e".into();
    form.draft_mut().content = "c".into();
    form.set_tags_input(" rust, , web ,");
    assert_eq!(form.slug_preview(), "olá-mundo");
    editor.save().await;

    create.assert_async().await;
    assert_eq!(editor.notifications_mut().last().unwrap().message(), "Post criado!");
}

#[tokio::test]
async fn opening_an_unread_message_marks_it_once() {
    let mut server = Server::new_async().await;
    let messages = json!([message("m1", 1, false), message("m2", 2, true)]);
    server
        .mock("GET", "/api/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(messages.to_string())
        .create_async()
        .await;
    let mark = server
        .mock("PUT", "/api/messages/m1/read")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "ok"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut inbox = Inbox::new(admin_client(&server));
    inbox.load().await;
    assert_eq!(inbox.messages()[0].id, "m2");
    assert_eq!(inbox.unread_count(), 1);

    inbox.open("m1").await;
    inbox.open("m1").await;
    inbox.open("m2").await;

    mark.assert_async().await;
    assert_eq!(inbox.unread_count(), 0);
    assert_eq!(inbox.opened().unwrap().id, "m2");
}

#[tokio::test]
async fn dashboard_previews_the_five_latest_messages() {
    let mut server = Server::new_async().await;
    let messages: Vec<_> = (1..=7).map(|d| message(&format!("m{}", d), d, d % 2 == 0)).collect();
    server
        .mock("GET", "/api/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::Value::from(messages).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/stats/dashboard")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total_messages": 7, "unread_messages": 4, "total_posts": 2, "total_areas": 5}"#)
        .create_async()
        .await;

    let mut dashboard = Dashboard::new(admin_client(&server));
    dashboard.load().await;

    assert_eq!(*dashboard.stats().unread_messages(), 4);
    let ids: Vec<_> = dashboard.recent_messages().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m7", "m6", "m5", "m4", "m3"]);
}

#[tokio::test]
async fn settings_save_clears_the_dirty_flag() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/settings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "site_settings"}"#)
        .create_async()
        .await;
    let save = server
        .mock("PUT", "/api/settings")
        .match_body(Matcher::PartialJson(json!({"hero": {"title_size": 72}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "site_settings", "hero": {"title_size": 72}}"#)
        .create_async()
        .await;

    let mut editor = SettingsEditor::new(admin_client(&server));
    editor.load().await;
    assert!(editor.is_loaded());
    editor.hero_mut().set_title_size(96);
    assert!(editor.is_dirty());
    editor.save().await;

    save.assert_async().await;
    assert!(!editor.is_dirty());
    assert_eq!(editor.settings().hero.title_size, 72);
    assert_eq!(editor.notifications_mut().last().unwrap().message(), "Configurações salvas!");
}

#[tokio::test]
async fn rejected_token_reports_an_expired_session() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/api/settings")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Token expired"}"#)
        .create_async()
        .await;

    let client = admin_client(&server);
    let mut editor = SettingsEditor::new(client.clone());
    editor.hero_mut().set_title_size(40);
    editor.save().await;

    assert_eq!(editor.notifications_mut().last().unwrap().message(), SESSION_EXPIRED);
    assert!(editor.is_dirty());
    assert!(client.session().token().is_none());
}
