//! HTTP plumbing shared by every endpoint.

use crate::{ClientConfig, Session};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use vitrine_error::{HttpError, HttpErrorKind, VitrineResult};

/// Client for the site API.
///
/// Every request carries the configured timeout. Privileged requests attach
/// the session token; a 401 response clears the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: reqwest::Client,
    session: Session,
}

/// Whether a request needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Public,
    Bearer,
}

impl ApiClient {
    /// Create a client with a fresh, signed-out session.
    #[instrument(skip(config), fields(base_url = %config.api.base_url))]
    pub fn new(config: ClientConfig) -> VitrineResult<Self> {
        Self::with_session(config, Session::new())
    }

    /// Create a client sharing an existing session.
    #[instrument(skip(config, session), fields(base_url = %config.api.base_url))]
    pub fn with_session(config: ClientConfig, session: Session) -> VitrineResult<Self> {
        tracing::debug!("Creating API client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                HttpError::new(HttpErrorKind::Request(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn request(&self, method: Method, route: &str, auth: Auth) -> RequestBuilder {
        let url = self.config.api_url(route);
        tracing::debug!(%method, %url, "Building request");
        let mut req = self.client.request(method, url);
        if auth == Auth::Bearer {
            if let Some(token) = self.session.token() {
                req = req.header("Authorization", format!("Bearer {}", token));
            }
        }
        req
    }

    /// Send a request and map transport failures and non-2xx statuses.
    pub(crate) async fn send(&self, req: RequestBuilder) -> VitrineResult<Response> {
        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            transport_error(&e)
        })?;
        self.check_response(response).await
    }

    pub(crate) async fn check_response(&self, response: Response) -> VitrineResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| status.to_string());
        tracing::error!(status = status.as_u16(), %message, "Server returned error");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("Token rejected, clearing session");
            self.session.clear_token();
        }
        Err(HttpError::from_status(status.as_u16(), message).into())
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> VitrineResult<T> {
        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            HttpError::new(HttpErrorKind::Decode(format!("Failed to parse response: {}", e)))
                .into()
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        auth: Auth,
    ) -> VitrineResult<T> {
        let response = self.send(self.request(Method::GET, route, auth)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        route: &str,
        body: &B,
        auth: Auth,
    ) -> VitrineResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(method, route, auth).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Send a request whose response body is only an acknowledgement.
    pub(crate) async fn send_ack(&self, method: Method, route: &str, auth: Auth) -> VitrineResult<()> {
        self.send(self.request(method, route, auth)).await?;
        Ok(())
    }
}

pub(crate) fn transport_error(e: &reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::new(HttpErrorKind::Timeout(e.to_string()))
    } else {
        HttpError::new(HttpErrorKind::Request(e.to_string()))
    }
}

/// Extract `detail` from an error body such as `{"detail": "Post not found"}`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_error_bodies() {
        assert_eq!(
            error_detail(r#"{"detail": "Post not found"}"#).as_deref(),
            Some("Post not found")
        );
        assert!(error_detail("<html>Bad gateway</html>").is_none());
        assert!(error_detail(r#"{"message": "nope"}"#).is_none());
    }
}
