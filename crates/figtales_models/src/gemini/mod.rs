//! Google Gemini `generateContent` integration.

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, CandidateContent, CandidatePart, Content, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
