//! JSON rendering error types.

/// Failure to render or read a value as JSON outside the durable store.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: failed to {} ({}) at line {} in {}", context, message, line, file)]
pub struct JsonError {
    /// What was being converted, e.g. "render stories"
    pub context: String,
    /// serde_json's explanation
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new error for `context` at the current location.
    ///
    /// ```
    /// use figtales_error::JsonError;
    ///
    /// let err = JsonError::new("render stories", "key must be a string");
    /// assert!(err.to_string().starts_with("JSON Error: failed to render stories"));
    /// ```
    #[track_caller]
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            context: context.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
