//! Durable storage for Figtales sessions.
//!
//! This crate provides the key-value store that mirrors session state across
//! restarts, plus file-backed implementations of the history and share
//! repositories.
//!
//! # Features
//!
//! - **Named keys**: session entities live under fixed [`StorageKey`]s
//! - **Pluggable backends**: [`KeyValueStore`] has filesystem and in-memory implementations
//! - **Atomic writes**: the filesystem store writes a temp file and renames it
//!
//! # Example
//!
//! ```rust
//! use figtales_storage::{FileSystemStore, KeyValueStore, StorageKey};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("figtales-doc-example");
//! let store = FileSystemStore::new(&dir)?;
//!
//! store.set(StorageKey::Stories.as_ref(), "[]")?;
//! assert_eq!(store.get(StorageKey::Stories.as_ref())?.as_deref(), Some("[]"));
//!
//! store.remove(StorageKey::Stories.as_ref())?;
//! assert!(store.get(StorageKey::Stories.as_ref())?.is_none());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod history;
mod key;
mod memory;
mod share;

pub use figtales_error::{StorageError, StorageErrorKind};
pub use filesystem::FileSystemStore;
pub use history::FileHistoryRepository;
pub use key::{StorageKey, validate_key};
pub use memory::MemoryStore;
pub use share::{FileShareRepository, SharedStories};

/// A string-keyed, string-valued durable store.
///
/// Operations are synchronous; values are small JSON documents.
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Whether `key` holds a value.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
