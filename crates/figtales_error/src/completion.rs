//! Completion service error types.

/// Failure conditions of a call to the generative completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// The request never produced an HTTP response
    #[display("Completion request failed: {}", _0)]
    Transport(String),
    /// The service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Response envelope had no `candidates`
    #[display("No content generated by the completion service")]
    MissingCandidates,
    /// Response envelope did not match the expected schema
    #[display("Malformed completion response: {}", _0)]
    MalformedResponse(String),
    /// An image could not be attached to the request
    #[display("Invalid image payload: {}", _0)]
    InvalidImage(String),
}

/// Completion service error with source location tracking.
///
/// # Examples
///
/// ```
/// use figtales_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::HttpStatus {
///     status_code: 500,
///     message: "Internal error".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status reported by the service, if the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            CompletionErrorKind::HttpStatus { status_code, .. } => Some(status_code),
            _ => None,
        }
    }
}
