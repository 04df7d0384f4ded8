//! Conversions between Figtales requests and the Gemini wire schema.

use crate::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part};
use figtales_core::GenerationRequest;
use figtales_error::{CompletionError, CompletionErrorKind};

/// Build the request body: prompt text first, then one inline part per image.
pub fn to_gemini_request(
    req: &GenerationRequest,
    generation_config: GenerationConfig,
) -> Result<GenerateContentRequest, CompletionError> {
    let mut parts = Vec::with_capacity(req.images().len() + 1);
    parts.push(Part::Text {
        text: req.prompt().clone(),
    });

    for (index, image) in req.images().iter().enumerate() {
        if image.data().is_empty() {
            return Err(CompletionError::new(CompletionErrorKind::InvalidImage(format!(
                "image {} has no data",
                index + 1
            ))));
        }
        parts.push(Part::InlineData {
            inline_data: InlineData::new(image.mime_type().clone(), image.data().clone()),
        });
    }

    GenerateContentRequest::builder()
        .contents(vec![Content::user(parts)])
        .generation_config(generation_config)
        .build()
        .map_err(|e| {
            CompletionError::new(CompletionErrorKind::MalformedResponse(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Text of `candidates[0].content.parts[0]`.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, CompletionError> {
    let candidate = response
        .candidates()
        .as_ref()
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::MissingCandidates))?;

    candidate
        .content()
        .as_ref()
        .and_then(|content| content.parts().first())
        .and_then(|part| part.text().clone())
        .ok_or_else(|| {
            CompletionError::new(CompletionErrorKind::MalformedResponse(format!(
                "candidate has no text (finish reason: {})",
                candidate.finish_reason().as_deref().unwrap_or("unknown")
            )))
        })
}
