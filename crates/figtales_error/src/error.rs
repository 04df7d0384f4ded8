//! Top-level error wrapper types.

use crate::{
    CompletionError, ConfigError, GenerationError, IngestError, JsonError,
    PersistenceError, ServerError, SessionError, StorageError, StoredStateError,
};

/// Every error condition a Figtales crate can report.
///
/// # Examples
///
/// ```
/// use figtales_error::{FigtalesError, SessionError, SessionErrorKind};
///
/// let session_err = SessionError::new(SessionErrorKind::NoStories);
/// let err: FigtalesError = session_err.into();
/// assert!(format!("{}", err).contains("Session Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FigtalesErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Durable key-value storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Saved state could not be read back
    #[from(StoredStateError)]
    StoredState(StoredStateError),
    /// Completion service error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Story generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// History or share persistence error
    #[from(PersistenceError)]
    Persistence(PersistenceError),
    /// File ingest error
    #[from(IngestError)]
    Ingest(IngestError),
    /// Session state error
    #[from(SessionError)]
    Session(SessionError),
    /// HTTP endpoint error
    #[from(ServerError)]
    Server(ServerError),
}

/// Figtales error with kind discrimination.
///
/// # Examples
///
/// ```
/// use figtales_error::{ConfigError, ConfigErrorKind, FigtalesResult};
///
/// fn might_fail() -> FigtalesResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::EmptyUpdate))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Figtales Error: {}", _0)]
pub struct FigtalesError(Box<FigtalesErrorKind>);

impl FigtalesError {
    /// Create a new error from a kind.
    pub fn new(kind: FigtalesErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FigtalesErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FigtalesErrorKind
impl<T> From<T> for FigtalesError
where
    T: Into<FigtalesErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Figtales operations.
pub type FigtalesResult<T> = std::result::Result<T, FigtalesError>;
