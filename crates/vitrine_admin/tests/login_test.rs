//! Sign-in page against a mock backend.

use mockito::{Matcher, Server};
use serde_json::json;
use vitrine_admin::{AdminPage, LoginMode, LoginPage, Route, resolve};
use vitrine_client::{ApiClient, ClientConfig};

fn client_for(server: &Server) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.url()).with_timeout_secs(5)).unwrap()
}

#[tokio::test]
async fn register_then_reach_the_dashboard() {
    let mut server = Server::new_async().await;
    let register = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "email": "ana@example.com",
            "password": "segredo",
            "name": "Ana"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token": "tok-new", "token_type": "bearer",
                "user": {"email": "ana@example.com", "name": "Ana", "role": "admin"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let mut page = LoginPage::new(client.clone());
    page.toggle_mode();
    assert_eq!(page.mode(), LoginMode::Register);
    page.email = "ana@example.com".into();
    page.password = "segredo".into();
    page.name = "Ana".into();

    let next = page.submit().await;

    register.assert_async().await;
    assert_eq!(next, Some(Route::Admin(AdminPage::Dashboard)));
    assert_eq!(
        page.notifications_mut().last().unwrap().message(),
        "Conta criada com sucesso!"
    );
    assert!(page.password.is_empty());
    assert_eq!(
        resolve(Route::Admin(AdminPage::Blog), client.session()),
        Route::Admin(AdminPage::Blog)
    );
}

#[tokio::test]
async fn rejected_credentials_show_the_server_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut page = LoginPage::new(client.clone());
    page.email = "ana@example.com".into();
    page.password = "errada".into();

    assert_eq!(page.submit().await, None);
    let last = page.notifications_mut().last().cloned().unwrap();
    assert!(last.is_error());
    assert_eq!(last.message(), "Invalid credentials");
    assert_eq!(
        resolve(Route::Admin(AdminPage::Dashboard), client.session()),
        Route::Login
    );
}
