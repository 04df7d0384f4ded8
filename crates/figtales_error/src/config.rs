//! Configuration and settings error types.

/// Why configuration or a settings change was refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Load(String),
    /// The merged configuration did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// `[completion].provider` names a provider that is not built in
    #[display("Unsupported completion provider '{}'", _0)]
    UnsupportedProvider(String),
    /// A settings value was out of range and the prior value was kept
    #[display("Invalid {}: '{}'", field, value)]
    InvalidSetting {
        /// Setting name, e.g. `criteriaCount`
        field: String,
        /// The offered value
        value: String,
    },
    /// A settings change named no fields
    #[display("No settings given")]
    EmptyUpdate,
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use figtales_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::UnsupportedProvider("openai".into()));
/// assert!(err.to_string().contains("Unsupported completion provider 'openai'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
