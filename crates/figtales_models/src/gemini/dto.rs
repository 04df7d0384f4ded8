//! Gemini REST wire schema.
//!
//! Only the fields Figtales reads are modelled; unknown fields are ignored.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline image attached to a request part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct InlineData {
    /// MIME type of the image
    mime_type: String,
    /// Base64 payload
    data: String,
}

impl InlineData {
    /// Inline data from an encoded image.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One part of a request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Prompt text
    Text {
        /// The text
        text: String,
    },
    /// Attached image
    InlineData {
        /// The image
        inline_data: InlineData,
    },
}

/// A request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Always "user" for Figtales requests
    role: String,
    /// Prompt first, then images
    parts: Vec<Part>,
}

impl Content {
    /// A user message with the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

/// Sampling parameters.
///
/// ```
/// use figtales_models::GenerationConfig;
///
/// let config = GenerationConfig::default().with_temperature(0.9);
/// assert_eq!(*config.temperature(), 0.9);
/// assert_eq!(*config.top_k(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_")]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Top-k sampling
    top_k: u32,
    /// Nucleus sampling
    top_p: f32,
    /// Output token cap
    max_output_tokens: u32,
}

impl GenerationConfig {
    /// Explicit sampling parameters.
    pub fn new(temperature: f32, top_k: u32, top_p: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_k,
            top_p,
            max_output_tokens,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(0.4, 32, 0.95, 8192)
    }
}

/// `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// Sampling parameters
    #[builder(default)]
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A text part of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CandidatePart {
    /// Generated text, absent for non-text parts
    #[serde(default)]
    text: Option<String>,
}

/// Generated content of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CandidateContent {
    /// Generated parts
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Content, absent when generation was blocked
    #[serde(default)]
    content: Option<CandidateContent>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateContentResponse {
    /// Generated alternatives
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}
