//! Trait definitions for the Figtales user story generator.
//!
//! These traits are the seams between the session logic and everything that
//! talks to the outside world: the completion model, history and share
//! persistence, and the user-facing notification surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionService, HistoryRepository, Notifier, ShareRepository, TracingNotifier};
