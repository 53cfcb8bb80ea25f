//! Vitrine: typed client and headless components for an admin-managed
//! marketing site.
//!
//! # Architecture
//!
//! Vitrine is organized as a workspace with focused crates:
//!
//! - `vitrine_error` - Error types
//! - `vitrine_core` - Site records (settings, areas, posts, messages, media)
//! - `vitrine_storage` - The `MediaStore` trait with in-memory and file-backed stores
//! - `vitrine_client` - REST client, configuration and sessions
//! - `vitrine_picker` - Headless media picker
//! - `vitrine_admin` - Admin editors, public views and the static-site renderer
//!
//! This crate re-exports everything for convenience and ships the `vitrine`
//! command-line tool.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrine::{ApiClient, ClientConfig, MediaPicker, PickerConfig, Tab};
//!
//! # async fn example() -> vitrine::VitrineResult<()> {
//! let client = Arc::new(ApiClient::new(ClientConfig::load()?)?);
//! let config = PickerConfig::builder().accept("image/*").build()?;
//! let mut picker = MediaPicker::new(client, config, |outcome| {
//!     println!("picked {:?}", outcome.media().urls());
//! });
//! picker.open();
//! picker.activate_tab(Tab::Library).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod logging;

pub use logging::{LoggingConfig, init_logging};

pub use vitrine_admin::*;
pub use vitrine_client::*;
pub use vitrine_core::*;
pub use vitrine_error::*;
pub use vitrine_picker::*;
pub use vitrine_storage::{
    DEFAULT_FOLDER, MediaStore, MemoryMediaStore, ProgressFn, UploadFile,
    mime_from_filename,
};
