//! Local validation errors.
//!
//! Validation failures are detected before any network call and never mutate state.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field was empty
    #[display("Required field is empty: {}", _0)]
    EmptyField(String),
    /// A file exceeded the upload size ceiling
    #[display("{} is too large ({} bytes, limit {} bytes)", filename, size, limit)]
    FileTooLarge {
        /// Offending file name
        filename: String,
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        limit: u64,
    },
    /// A file's type is not accepted by the current picker
    #[display("{} has an unsupported type: {}", filename, file_type)]
    UnsupportedType {
        /// Offending file name
        filename: String,
        /// MIME type of the file
        file_type: String,
    },
    /// A value failed a domain rule
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidValue {
        /// Field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyField("url".into()));
/// assert!(format!("{}", err).contains("url"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of validation failure
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an empty required field.
    #[track_caller]
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::EmptyField(field.into()))
    }
}
