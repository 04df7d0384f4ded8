//! HTTP endpoint for Figtales story generation.
//!
//! Exposes `POST /generate-stories`, which takes data-URL images plus story
//! settings and answers with normalized stories, and `GET /health`. Every
//! response carries permissive CORS headers so browser front ends can call it
//! directly.
//!
//! # Example
//!
//! ```rust,no_run
//! use figtales_interface::CompletionService;
//! use figtales_server::{ApiState, serve};
//! use std::sync::Arc;
//!
//! # async fn run(completion: Arc<dyn CompletionService>) -> Result<(), Box<dyn std::error::Error>> {
//! serve("127.0.0.1:8080", ApiState::new(completion)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod cors;
mod wire;

pub use api::{ApiState, create_router, serve, serve_listener};
pub use cors::{ALLOW_HEADERS, ALLOW_ORIGIN};
pub use figtales_error::{ServerError, ServerErrorKind};
pub use wire::{ErrorBody, GenerateStoriesRequest, GenerateStoriesResponse};
