//! Bearer-token session.
//!
//! A [`Session`] is an explicit, cloneable holder of the signed-in token and
//! user. Every clone shares the same state, so the API client, the route guard
//! and the admin editors observe a logout or a 401 immediately.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use vitrine_core::{TokenResponse, User};
use vitrine_error::{JsonError, StorageError, StorageErrorKind, VitrineResult};

/// A bearer token plus its expiry, when the token is a JWT carrying `exp`.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct AuthToken {
    raw: String,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

impl AuthToken {
    /// Wrap a raw token, decoding the JWT `exp` claim when present.
    ///
    /// Opaque (non-JWT) tokens are accepted and never expire client-side.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let expires_at = Self::decode_expiry(&raw);
        Self { raw, expires_at }
    }

    fn decode_expiry(raw: &str) -> Option<DateTime<Utc>> {
        let payload = raw.split('.').nth(1)?;
        let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let claims: Claims = serde_json::from_slice(&decoded).ok()?;
        DateTime::from_timestamp(claims.exp?, 0)
    }

    /// True once `now` has reached the expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    /// True once the token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<AuthToken>,
    user: Option<User>,
}

/// Shared holder of the bearer token and signed-in user.
///
/// # Example
///
/// ```
/// use vitrine_client::Session;
///
/// let session = Session::new();
/// assert!(!session.is_authenticated());
/// session.set_token("opaque-token");
/// assert_eq!(session.token().as_deref(), Some("opaque-token"));
/// session.clear_token();
/// assert!(session.token().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    /// An empty, signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Raw bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.read().token.as_ref().map(|t| t.raw().clone())
    }

    /// Token with decoded expiry, if any.
    pub fn auth_token(&self) -> Option<AuthToken> {
        self.read().token.clone()
    }

    /// Replace the bearer token.
    pub fn set_token(&self, raw: impl Into<String>) {
        self.write().token = Some(AuthToken::new(raw));
    }

    /// Forget the token and the user.
    pub fn clear_token(&self) {
        let mut state = self.write();
        state.token = None;
        state.user = None;
    }

    /// A token is present and not expired.
    pub fn is_authenticated(&self) -> bool {
        self.read().token.as_ref().is_some_and(|t| !t.is_expired())
    }

    /// Signed-in user, if known.
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// Record the signed-in user.
    pub fn set_user(&self, user: User) {
        self.write().user = Some(user);
    }

    /// Adopt the token and user from a login or register response.
    pub fn sign_in(&self, response: TokenResponse) {
        let mut state = self.write();
        state.token = Some(AuthToken::new(response.access_token));
        state.user = Some(response.user);
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> Option<StoredSession> {
        let state = self.read();
        state.token.as_ref().map(|token| StoredSession {
            token: token.raw().clone(),
            user: state.user.clone(),
        })
    }

    /// Replace the current state with a stored one.
    pub fn restore(&self, stored: StoredSession) {
        let mut state = self.write();
        state.token = Some(AuthToken::new(stored.token));
        state.user = stored.user;
    }
}

/// On-disk form of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Raw bearer token
    pub token: String,
    /// Signed-in user
    #[serde(default)]
    pub user: Option<User>,
}

/// Persistence for sessions across process runs.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if one exists.
    async fn load(&self) -> VitrineResult<Option<StoredSession>>;

    /// Store a session, replacing any previous one.
    async fn save(&self, session: &StoredSession) -> VitrineResult<()>;

    /// Remove the stored session.
    async fn clear(&self) -> VitrineResult<()>;
}

/// Session store writing a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SessionStore for FileSessionStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> VitrineResult<Option<StoredSession>> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => {
                let stored = serde_json::from_slice(&raw).map_err(|e| {
                    JsonError::new(format!("{}: {}", self.path.display(), e))
                })?;
                Ok(Some(stored))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, session), fields(path = %self.path.display()))]
    async fn save(&self, session: &StoredSession) -> VitrineResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
        let raw = serde_json::to_vec_pretty(session).map_err(|e| JsonError::new(e.to_string()))?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        tracing::debug!("Session saved");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn clear(&self) -> VitrineResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"user_id":"u1","exp":{}}}"#, exp));
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn jwt_expiry_is_decoded() {
        let token = AuthToken::new(jwt_with_exp(1_700_000_000));
        let exp = token.expires_at().unwrap();
        assert_eq!(exp.timestamp(), 1_700_000_000);
        assert!(token.is_expired_at(exp));
        assert!(!token.is_expired_at(exp - chrono::Duration::seconds(1)));
    }

    #[test]
    fn expired_token_is_not_authenticated() {
        let session = Session::new();
        session.set_token(jwt_with_exp(1));
        assert!(session.token().is_some());
        assert!(!session.is_authenticated());

        let future = Utc::now().timestamp() + 3600;
        session.set_token(jwt_with_exp(future));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new();
        let other = session.clone();
        session.sign_in(TokenResponse {
            access_token: "opaque".into(),
            token_type: "bearer".into(),
            user: User {
                email: "admin@example.com".into(),
                name: "Admin".into(),
                role: "admin".into(),
            },
        });
        assert_eq!(other.user().map(|u| u.email), Some("admin@example.com".to_string()));
        other.clear_token();
        assert!(session.user().is_none());
    }
}
