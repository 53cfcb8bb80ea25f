//! Sign-in and registration page.

use crate::guard::{AdminPage, Route};
use vitrine_client::ApiClient;
use vitrine_core::{Credentials, Registration};
use vitrine_error::VitrineResult;
use vitrine_picker::{Notification, Notifications};

const FALLBACK: &str = "Erro ao processar. Tente novamente.";

/// Whether the form signs in or creates an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LoginMode {
    /// "Acesso ao Painel"
    #[default]
    #[display("Acesso ao Painel")]
    SignIn,
    /// "Criar Conta"
    #[display("Criar Conta")]
    Register,
}

/// Login form state.
#[derive(Debug)]
pub struct LoginPage {
    client: ApiClient,
    mode: LoginMode,
    /// Account e-mail
    pub email: String,
    /// Account password
    pub password: String,
    /// Display name, used when registering
    pub name: String,
    busy: bool,
    notifications: Notifications,
}

impl LoginPage {
    /// Empty sign-in form.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            mode: LoginMode::default(),
            email: String::new(),
            password: String::new(),
            name: String::new(),
            busy: false,
            notifications: Notifications::default(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    /// Switch between signing in and registering.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        };
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Submit the form. On success the session holds the token and the
    /// dashboard route is returned.
    #[tracing::instrument(skip(self), fields(mode = %self.mode, email = %self.email))]
    pub async fn submit(&mut self) -> Option<Route> {
        self.busy = true;
        let result: VitrineResult<_> = match self.mode {
            LoginMode::SignIn => {
                self.client
                    .login(&Credentials::new(self.email.clone(), self.password.clone()))
                    .await
            }
            LoginMode::Register => {
                self.client
                    .register(&Registration {
                        email: self.email.clone(),
                        password: self.password.clone(),
                        name: self.name.clone(),
                    })
                    .await
            }
        };
        self.busy = false;

        match result {
            Ok(_) => {
                let message = match self.mode {
                    LoginMode::SignIn => "Login realizado!",
                    LoginMode::Register => "Conta criada com sucesso!",
                };
                self.notifications.push(Notification::success(message));
                self.password.clear();
                Some(Route::Admin(AdminPage::Dashboard))
            }
            Err(e) => {
                tracing::error!(error = %e, "Sign-in failed");
                let message = e.server_message().unwrap_or(FALLBACK).to_string();
                self.notifications.push(Notification::error(message));
                None
            }
        }
    }
}
