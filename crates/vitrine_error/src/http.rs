//! HTTP error types.

/// Kinds of failures observed while talking to the site API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum HttpErrorKind {
    /// The request never produced a response (DNS, connect, reset)
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The request exceeded the configured timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// The server answered with a non-2xx status
    #[display("Server returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The requested resource does not exist (404)
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// The bearer token is missing, invalid or expired (401)
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),
    /// The response body could not be decoded
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// HTTP error with source location.
///
/// # Examples
///
/// ```
/// use vitrine_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::NotFound("/api/blog/missing".into()));
/// assert!(err.is_not_found());
/// assert!(format!("{}", err).contains("Not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The kind of failure
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Map a non-success status code to the matching kind.
    ///
    /// ```
    /// use vitrine_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::from_status(401, "Token expired");
    /// assert!(err.is_unauthorized());
    /// let err = HttpError::from_status(500, "boom");
    /// assert!(matches!(err.kind, HttpErrorKind::Status { status: 500, .. }));
    /// ```
    #[track_caller]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = match status {
            401 => HttpErrorKind::Unauthorized(message),
            404 => HttpErrorKind::NotFound(message),
            _ => HttpErrorKind::Status { status, message },
        };
        Self::new(kind)
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, HttpErrorKind::NotFound(_))
    }

    /// True for 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind, HttpErrorKind::Unauthorized(_))
    }
}
