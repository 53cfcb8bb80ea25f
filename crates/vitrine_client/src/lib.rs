//! Typed REST client for the Vitrine site API.
//!
//! [`ApiClient`] covers every route the site uses: settings, areas, blog,
//! contact messages, media, auth and dashboard stats. It also implements
//! [`vitrine_storage::MediaStore`], so the media picker can run against the
//! live backend.
//!
//! # Example
//!
//! ```no_run
//! use vitrine_client::{ApiClient, ClientConfig};
//! use vitrine_core::{Credentials, Language};
//!
//! # async fn example() -> vitrine_error::VitrineResult<()> {
//! let client = ApiClient::new(ClientConfig::load()?)?;
//! let settings = client.get_settings().await?;
//! println!("{}", settings.hero.title.get(Language::En));
//!
//! client.login(&Credentials::new("admin@example.com", "secret")).await?;
//! let stats = client.dashboard_stats().await?;
//! println!("{} unread", stats.unread_messages());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod client;
mod config;
mod content;
mod inbox;
mod media;
mod session;

pub use client::ApiClient;
pub use config::{ApiConfig, ClientConfig, SessionConfig};
pub use session::{AuthToken, FileSessionStore, Session, SessionStore, StoredSession};
