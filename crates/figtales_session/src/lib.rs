//! Session state and story generation for Figtales.
//!
//! [`SessionStore`] is the single owner of uploaded files, settings, the
//! current stories and history. It mirrors every change to a durable
//! [`KeyValueStore`](figtales_storage::KeyValueStore) and rehydrates from it
//! on open. [`GenerationOrchestrator`] drives one generation: validate,
//! encode, call the completion service, parse, filter, persist.
//!
//! # Example
//!
//! ```no_run
//! use figtales_core::StorySettings;
//! use figtales_interface::TracingNotifier;
//! use figtales_models::GeminiClient;
//! use figtales_session::{GenerationOrchestrator, SessionStore};
//! use figtales_storage::FileSystemStore;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let durable = Arc::new(FileSystemStore::new("/tmp/figtales")?);
//! let mut session = SessionStore::open(durable, StorySettings::default());
//!
//! let orchestrator = GenerationOrchestrator::new(
//!     Arc::new(GeminiClient::new("api-key", "gemini-1.5-flash")),
//!     Arc::new(TracingNotifier),
//! );
//! orchestrator.generate(&mut session).await?;
//! println!("{} stories", session.stories().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod history;
mod ingest;
mod orchestrator;
mod previews;
mod share;
mod store;

pub use export::{CSV_HEADER, story_text, to_copy_text, to_csv};
pub use history::load_history;
pub use ingest::{IngestReport, files_added_message, ingest_bytes, ingest_paths};
pub use orchestrator::{GenerationOrchestrator, GenerationOutcome, GenerationPhase};
pub use previews::PreviewRegistry;
pub use share::ShareService;
pub use store::{GenerationGuard, SessionStore};
