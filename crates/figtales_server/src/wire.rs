//! Request and response bodies of the endpoint.

use derive_getters::Getters;
use figtales_core::UserStory;
use serde::{Deserialize, Serialize};

fn default_story_count() -> u32 {
    5
}

fn default_criteria_count() -> u32 {
    3
}

/// Body of `POST /generate-stories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoriesRequest {
    /// Prompt to send; a generic one is built from the counts when absent
    #[serde(default)]
    prompt: Option<String>,
    /// Images as `data:<mime>;base64,<data>` URLs
    #[serde(default)]
    images: Vec<String>,
    /// Stories to return
    #[serde(default = "default_story_count")]
    story_count: u32,
    /// Criteria per story
    #[serde(default = "default_criteria_count")]
    criteria_count: u32,
    /// Kind of user the stories are written for
    #[serde(default)]
    user_type: Option<String>,
    /// Audience the stories target
    #[serde(default)]
    audience_type: Option<String>,
}

impl GenerateStoriesRequest {
    /// Request with images only; counts take their defaults.
    pub fn new(images: Vec<String>) -> Self {
        Self {
            prompt: None,
            images,
            story_count: default_story_count(),
            criteria_count: default_criteria_count(),
            user_type: None,
            audience_type: None,
        }
    }

    /// Override the story and criteria counts.
    pub fn with_shape(mut self, story_count: u32, criteria_count: u32) -> Self {
        self.story_count = story_count;
        self.criteria_count = criteria_count;
        self
    }

    /// Override the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// Successful answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateStoriesResponse {
    /// Normalized stories, exactly `storyCount` of them
    pub stories: Vec<UserStory>,
}

/// Failure answer, always sent with HTTP 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason
    pub error: String,
}
