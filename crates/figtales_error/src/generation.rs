//! Story generation error types.

use crate::CompletionErrorKind;

/// Reasons a generation cycle can stop before publishing stories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No design files are present
    #[display("No design files: upload at least one design file before generating stories")]
    NoInput,
    /// A design file could not be converted for transport
    #[display("Failed to encode '{}': {}", file, reason)]
    Encoding {
        /// Name of the file that failed
        file: String,
        /// Why the conversion failed
        reason: String,
    },
    /// The completion service call failed
    #[display("{}", _0)]
    CompletionService(CompletionErrorKind),
    /// Another generation is still in flight
    #[display("A story generation is already in progress")]
    GenerationInProgress,
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use figtales_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoInput);
/// assert!(format!("{}", err).contains("No design files"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<crate::CompletionError> for GenerationError {
    #[track_caller]
    fn from(err: crate::CompletionError) -> Self {
        Self::new(GenerationErrorKind::CompletionService(err.kind))
    }
}
