//! Shared state for commands that talk to the backend.

use vitrine::{
    ApiClient, ClientConfig, ConfigError, FileSessionStore, SessionStore, VitrineResult,
};

/// Configured client plus the store its session persists to.
#[derive(Debug)]
pub struct Context {
    /// API client with the stored session restored
    pub client: ApiClient,
    /// Session file
    pub store: FileSessionStore,
}

impl Context {
    /// Load configuration, apply the base URL override and restore the stored session.
    #[tracing::instrument]
    pub async fn load(base_url: Option<&str>) -> VitrineResult<Self> {
        let mut config = ClientConfig::load()?;
        if let Some(url) = base_url {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }
        let path = config
            .session_path()
            .ok_or_else(|| ConfigError::new("No home directory for the session file"))?;
        let store = FileSessionStore::new(path);

        let client = ApiClient::new(config)?;
        if let Some(stored) = store.load().await? {
            client.session().restore(stored);
            if client.session().is_authenticated() {
                tracing::debug!("Restored session");
            } else {
                tracing::warn!("Stored token has expired");
                client.session().clear_token();
                store.clear().await?;
            }
        }

        Ok(Self { client, store })
    }

    /// Persist the client's session, or remove the file when signed out.
    pub async fn persist(&self) -> VitrineResult<()> {
        match self.client.session().snapshot() {
            Some(stored) => self.store.save(&stored).await,
            None => self.store.clear().await,
        }
    }
}
