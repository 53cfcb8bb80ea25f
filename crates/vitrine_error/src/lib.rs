//! Error types for the Vitrine site client.
//!
//! This crate provides the foundation error types used throughout the Vitrine workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy mirrors what a user can observe:
//! - [`ValidationError`]: blocked locally before any network call
//! - [`HttpError`]: transport failure, timeout, non-2xx, not found, unauthorized
//! - [`ConfigError`], [`JsonError`], [`StorageError`], [`BuilderError`]: ambient failures
//!
//! # Examples
//!
//! ```
//! use vitrine_error::{HttpError, HttpErrorKind, VitrineResult};
//!
//! fn fetch_media() -> VitrineResult<Vec<String>> {
//!     Err(HttpError::new(HttpErrorKind::Request("Connection refused".into())))?
//! }
//!
//! match fetch_media() {
//!     Ok(items) => println!("Got {} items", items.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod http;
mod json;
mod storage;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{VitrineError, VitrineErrorKind, VitrineResult};
pub use http::{HttpError, HttpErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
