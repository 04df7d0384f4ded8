//! Upload ingest error types.

/// Why a file was refused at ingest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IngestErrorKind {
    /// The file could not be read
    #[display("Unable to read '{}': {}", name, reason)]
    Unreadable {
        /// File name
        name: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// The file is not an accepted image type
    #[display("'{}' has unsupported type {}", name, mime_type)]
    UnsupportedType {
        /// File name
        name: String,
        /// Detected mime type
        mime_type: String,
    },
    /// The file exceeds the size limit
    #[display("'{}' is {} bytes, limit is {}", name, size, limit)]
    TooLarge {
        /// File name
        name: String,
        /// File size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },
    /// More files were offered than one ingest accepts
    #[display("'{}' exceeds the limit of {} files per upload", name, limit)]
    TooManyFiles {
        /// File name
        name: String,
        /// Configured files-per-ingest limit
        limit: usize,
    },
}

/// Ingest error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ingest Error: {} at line {} in {}", kind, line, file)]
pub struct IngestError {
    /// The kind of error that occurred
    pub kind: IngestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IngestError {
    /// Create a new ingest error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IngestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
