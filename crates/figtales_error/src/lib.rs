//! Error types for the Figtales library.
//!
//! This crate provides the foundation error types used throughout the Figtales workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use figtales_error::{FigtalesResult, GenerationError, GenerationErrorKind};
//!
//! fn generate() -> FigtalesResult<Vec<String>> {
//!     Err(GenerationError::new(GenerationErrorKind::NoInput))?
//! }
//!
//! match generate() {
//!     Ok(stories) => println!("Got {} stories", stories.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod generation;
mod ingest;
mod json;
mod persistence;
mod server;
mod session;
mod storage;
mod stored_state;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FigtalesError, FigtalesErrorKind, FigtalesResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use ingest::{IngestError, IngestErrorKind};
pub use json::JsonError;
pub use persistence::{PersistenceError, PersistenceErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use session::{SessionError, SessionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use stored_state::StoredStateError;
