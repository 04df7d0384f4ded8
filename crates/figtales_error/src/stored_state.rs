//! Errors for saved session state that cannot be read back.
//!
//! These never reach the user: the session treats them as "no saved state".

/// A durable-store entry whose payload was unusable.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed stored state under '{}': {} at line {} in {}", key, reason, line, file)]
pub struct StoredStateError {
    /// Storage key that held the payload
    pub key: String,
    /// Why the payload was rejected
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StoredStateError {
    /// Create a new StoredStateError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use figtales_error::StoredStateError;
    ///
    /// let err = StoredStateError::new("app_files", "expected an array");
    /// assert_eq!(err.key, "app_files");
    /// ```
    #[track_caller]
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
