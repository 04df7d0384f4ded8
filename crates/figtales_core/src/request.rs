//! Per-invocation generation requests.

use crate::{EncodedImage, StorySettings};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the completion service needs for one generation.
///
/// Built fresh for every invocation and never persisted.
///
/// # Examples
///
/// ```
/// use figtales_core::{EncodedImage, GenerationRequestBuilder};
///
/// let request = GenerationRequestBuilder::default()
///     .prompt("Generate 2 user stories")
///     .images(vec![EncodedImage::from_bytes("image/png", b"png")])
///     .story_count(2)
///     .criteria_count(3)
///     .user_type("shopper")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.story_count(), 2);
/// assert!(request.audience_type().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Natural-language instructions for the model
    #[builder(setter(into))]
    prompt: String,
    /// Design screens to describe
    #[builder(default)]
    images: Vec<EncodedImage>,
    /// Number of stories requested
    story_count: u32,
    /// Criteria requested per story
    criteria_count: u32,
    /// Kind of user the stories are written for
    #[builder(setter(into), default = "\"user\".to_string()")]
    user_type: String,
    /// Optional target audience
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audience_type: Option<String>,
}

impl GenerationRequest {
    /// Build a request for the given settings, embedding the story prompt.
    pub fn from_settings(settings: &StorySettings, images: Vec<EncodedImage>) -> Self {
        Self {
            prompt: story_prompt(settings),
            images,
            story_count: *settings.story_count(),
            criteria_count: *settings.criteria_count(),
            user_type: settings.user_type().clone(),
            audience_type: settings.audience_type().clone(),
        }
    }

    /// The shape the parsed response must be normalized to.
    pub fn shape(&self) -> (u32, u32) {
        (self.story_count, self.criteria_count)
    }
}

/// Prompt asking for exactly the configured number of well-formed stories.
pub fn story_prompt(settings: &StorySettings) -> String {
    let stories = settings.story_count();
    let criteria = settings.criteria_count();
    let mut prompt = format!(
        "Generate exactly {stories} user stories with {criteria} acceptance criteria each \
         based on these design screens. Each user story must strictly follow the format \
         'As a [user type], I want to [action], so that [benefit]'. The user type is '{}'.",
        settings.user_type()
    );
    if let Some(audience) = settings.audience_type() {
        prompt.push_str(&format!(" The stories target this audience: {audience}."));
    }
    prompt.push_str(&format!(
        " Ensure each story has a title starting with 'As a', a description, and exactly \
         {criteria} clear and testable acceptance criteria. Do not include any summaries, \
         introductions, placeholder text such as 'Here are X user stories', or any other \
         content that is not a user story. Return only the {stories} user stories in the \
         specified format."
    ));
    prompt
}

/// Prompt used by the HTTP endpoint when the caller supplies none.
pub fn fallback_prompt(story_count: u32, criteria_count: u32) -> String {
    format!(
        "Generate {story_count} user stories with {criteria_count} acceptance criteria each \
         based on these design screens."
    )
}
