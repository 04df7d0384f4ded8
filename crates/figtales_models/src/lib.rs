//! Completion service integrations for Figtales.
//!
//! Each provider lives behind its own feature flag. Gemini is enabled by default.
//!
//! # Example
//!
//! ```no_run
//! use figtales_core::{EncodedImage, GenerationRequest, StorySettings};
//! use figtales_interface::CompletionService;
//! use figtales_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("api-key", "gemini-1.5-flash");
//! let image = EncodedImage::from_bytes("image/png", &std::fs::read("login.png")?);
//! let request = GenerationRequest::from_settings(&StorySettings::default(), vec![image]);
//! let text = client.complete(&request).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, CandidateContent, CandidatePart, Content, GeminiClient, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig, InlineData, Part,
};

use figtales_config::CompletionConfig;
use figtales_error::{CompletionError, CompletionErrorKind};
use figtales_interface::CompletionService;
use std::sync::Arc;

/// Build the completion service named by `config.provider`.
///
/// # Errors
///
/// Fails when the provider is unknown or its API key is missing.
pub fn completion_service_from_config(
    config: &CompletionConfig,
) -> Result<Arc<dyn CompletionService>, CompletionError> {
    match config.provider.as_str() {
        #[cfg(feature = "gemini")]
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(CompletionError::new(CompletionErrorKind::Transport(format!(
            "Completion provider '{}' is not available",
            other
        )))),
    }
}
