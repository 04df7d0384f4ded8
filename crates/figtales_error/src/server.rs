//! Error types for the story generation endpoint.

/// Error kinds for endpoint operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// The request carried no images
    #[display("No images provided in the request")]
    NoImages,
    /// The request body was invalid
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Failed to bind the listener
    #[display("Failed to bind {}: {}", address, reason)]
    Bind {
        /// Address that could not be bound
        address: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// The server stopped with an I/O failure
    #[display("Server failed: {}", _0)]
    Serve(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
