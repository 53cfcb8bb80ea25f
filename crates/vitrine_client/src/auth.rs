//! Login, registration and the current user.

use crate::ApiClient;
use crate::client::Auth;
use reqwest::Method;
use tracing::instrument;
use vitrine_core::{Credentials, Registration, TokenResponse, User};
use vitrine_error::VitrineResult;

impl ApiClient {
    /// Sign in and adopt the returned token into the session.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> VitrineResult<User> {
        let response: TokenResponse = self
            .send_json(Method::POST, "/auth/login", credentials, Auth::Public)
            .await?;
        let user = response.user.clone();
        self.session().sign_in(response);
        tracing::info!(role = %user.role, "Signed in");
        Ok(user)
    }

    /// Create an account and adopt the returned token into the session.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> VitrineResult<User> {
        let response: TokenResponse = self
            .send_json(Method::POST, "/auth/register", registration, Auth::Public)
            .await?;
        let user = response.user.clone();
        self.session().sign_in(response);
        tracing::info!("Registered");
        Ok(user)
    }

    /// Fetch the user the token belongs to and record it in the session.
    #[instrument(skip(self))]
    pub async fn me(&self) -> VitrineResult<User> {
        let user: User = self.get_json("/auth/me", Auth::Bearer).await?;
        self.session().set_user(user.clone());
        Ok(user)
    }

    /// Forget the token locally. The backend keeps no server-side session.
    pub fn logout(&self) {
        self.session().clear_token();
        tracing::info!("Signed out");
    }
}
