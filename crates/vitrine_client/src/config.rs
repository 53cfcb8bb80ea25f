//! Client configuration.
//!
//! The configuration system layers, lowest precedence first:
//! - Bundled defaults (include_str! from vitrine.toml)
//! - User overrides (~/.config/vitrine/vitrine.toml, then ./vitrine.toml)
//! - `VITRINE_*` environment variables (`VITRINE_API__TIMEOUT_SECS=10`)

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use vitrine_error::{ConfigError, VitrineError, VitrineResult};

const DEFAULT_CONFIG: &str = include_str!("../vitrine.toml");

/// Connection settings for the site API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the backend, without the `/api` suffix
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Session persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file; empty selects the default location
    #[serde(default)]
    pub path: String,
}

/// Top-level client configuration.
///
/// # Example
///
/// ```
/// use vitrine_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://site.example.com/").with_timeout_secs(5);
/// assert_eq!(config.api_url("/settings"), "https://site.example.com/api/settings");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API connection
    pub api: ApiConfig,
    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,
}

impl ClientConfig {
    /// Configuration for a backend at `base_url` with default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                timeout_secs: default_timeout_secs(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Replace the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Full URL for an API route such as `/media/upload`.
    pub fn api_url(&self, route: &str) -> String {
        format!("{}/api{}", self.api.base_url.trim_end_matches('/'), route)
    }

    /// Session file location.
    pub fn session_path(&self) -> Option<PathBuf> {
        if self.session.path.is_empty() {
            dirs::home_dir().map(|home| home.join(".config/vitrine/session.json"))
        } else {
            Some(PathBuf::from(&self.session.path))
        }
    }

    /// Load configuration from a single TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VitrineResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to load configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    #[instrument]
    pub fn load() -> VitrineResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vitrine/vitrine.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("vitrine").required(false))
            .add_source(Environment::with_prefix("VITRINE").separator("__"));

        let config: Self = builder
            .build()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to load configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VitrineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        debug!(base_url = %config.api.base_url, timeout_secs = config.api.timeout_secs, "Configuration loaded");
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8001")
    }
}
