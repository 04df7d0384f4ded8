//! History and share-link persistence error types.

/// Failures saving or loading generation history and shared stories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PersistenceErrorKind {
    /// Saving a history entry failed
    #[display("Failed to save generation history: {}", _0)]
    HistorySave(String),
    /// Loading history failed
    #[display("Failed to load history: {}", _0)]
    HistoryFetch(String),
    /// Creating a share failed
    #[display("Failed to create share link: {}", _0)]
    ShareCreate(String),
    /// Loading a share failed
    #[display("Failed to load shared stories: {}", _0)]
    ShareFetch(String),
    /// There is nothing to share
    #[display("No stories to share")]
    NoStories,
}

/// Persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use figtales_error::{PersistenceError, PersistenceErrorKind};
///
/// let err = PersistenceError::new(PersistenceErrorKind::NoStories);
/// assert!(format!("{}", err).contains("No stories"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Persistence Error: {} at line {} in {}", kind, line, file)]
pub struct PersistenceError {
    /// The kind of error that occurred
    pub kind: PersistenceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PersistenceError {
    /// Create a new persistence error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PersistenceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
