//! Storage keys for mirrored session state.

use figtales_error::{StorageError, StorageErrorKind};

/// Keys under which the session mirrors its state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum StorageKey {
    /// Current story collection
    #[strum(serialize = "app_stories")]
    Stories,
    /// Uploaded design files
    #[strum(serialize = "app_files")]
    Files,
    /// Generation settings
    #[strum(serialize = "app_settings")]
    Settings,
}

/// Check that `key` is non-empty and only uses `[A-Za-z0-9_-]`.
///
/// Keys become file names, so anything else is rejected.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())))
    }
}
