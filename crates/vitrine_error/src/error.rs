//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, HttpError, JsonError, StorageError, ValidationError,
};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineError, ValidationError};
///
/// let err: VitrineError = ValidationError::empty("title").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VitrineErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Local validation error
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Vitrine error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vitrine Error: {}", _0)]
pub struct VitrineError(Box<VitrineErrorKind>);

impl VitrineError {
    /// Create a new error from a kind.
    pub fn new(kind: VitrineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VitrineErrorKind {
        &self.0
    }

    /// True when the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind(), VitrineErrorKind::Http(e) if e.is_unauthorized())
    }

    /// True when the server reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), VitrineErrorKind::Http(e) if e.is_not_found())
            || matches!(
                self.kind(),
                VitrineErrorKind::Storage(e) if matches!(e.kind, crate::StorageErrorKind::NotFound(_))
            )
    }

    /// Message the server sent with a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self.kind() {
            VitrineErrorKind::Http(e) => match &e.kind {
                crate::HttpErrorKind::Status { message, .. }
                | crate::HttpErrorKind::NotFound(message)
                | crate::HttpErrorKind::Unauthorized(message) => Some(message),
                _ => None,
            },
            _ => None,
        }
    }

    /// True when the failure was detected locally before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), VitrineErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to VitrineErrorKind
impl<T> From<T> for VitrineError
where
    T: Into<VitrineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vitrine operations.
pub type VitrineResult<T> = std::result::Result<T, VitrineError>;
