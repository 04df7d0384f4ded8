//! Figtales - user stories from UI designs
//!
//! Figtales takes screenshots of UI designs, asks a vision-capable generative
//! model to describe them as user stories, and turns the free-text answer into
//! a bounded set of well-formed stories with acceptance criteria. Stories can
//! be copied as text, exported as CSV, or shared by link.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use figtales::{
//!     FigtalesConfig, FileSystemStore, GenerationOrchestrator, SessionStore, TracingNotifier,
//!     completion_service_from_config, ingest_paths,
//! };
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FigtalesConfig::load()?;
//!     let durable = Arc::new(FileSystemStore::new(config.session.resolve_state_dir())?);
//!     let mut session = SessionStore::open(durable, config.defaults.story_settings());
//!
//!     let mut report = ingest_paths(&[PathBuf::from("login.png")], &config.upload).await;
//!     session.add_files(report.take_accepted());
//!
//!     let completion = completion_service_from_config(&config.completion)?;
//!     let orchestrator = GenerationOrchestrator::new(completion, Arc::new(TracingNotifier));
//!     orchestrator.generate(&mut session).await?;
//!
//!     for story in session.stories() {
//!         println!("{}", story.title());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini completion service (default)
//!
//! # Architecture
//!
//! - `figtales_error` - Error types
//! - `figtales_core` - Data model (files, settings, stories, history)
//! - `figtales_interface` - Completion, persistence and notification traits
//! - `figtales_parser` - Free text to normalized stories
//! - `figtales_storage` - Durable key-value store and file repositories
//! - `figtales_config` - Layered TOML configuration
//! - `figtales_models` - Completion service clients
//! - `figtales_session` - Session state, generation, ingest, export and sharing
//! - `figtales_server` - HTTP story generation endpoint
//!
//! This crate (`figtales`) re-exports everything for convenience.

pub use figtales_config::*;
pub use figtales_core::*;
pub use figtales_error::*;
pub use figtales_interface::*;
pub use figtales_parser::*;
pub use figtales_session::*;
pub use figtales_storage::*;

pub use figtales_server::{
    ALLOW_HEADERS, ALLOW_ORIGIN, ApiState, ErrorBody, GenerateStoriesRequest,
    GenerateStoriesResponse, create_router, serve, serve_listener,
};

#[cfg(feature = "gemini")]
pub use figtales_models::*;

mod console;
pub mod telemetry;

pub use console::ConsoleNotifier;
