//! Forcing extracted stories into an exact shape.

use crate::ExtractedStory;
use figtales_core::{AcceptanceCriterion, UserStory};

const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;
const ELLIPSIS: &str = "...";

/// The number of stories and criteria per story to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoryShape {
    /// Stories to produce
    pub story_count: u32,
    /// Criteria per story
    pub criteria_count: u32,
}

impl StoryShape {
    /// Shape with the given counts.
    pub fn new(story_count: u32, criteria_count: u32) -> Self {
        Self {
            story_count,
            criteria_count,
        }
    }
}

impl From<&figtales_core::StorySettings> for StoryShape {
    fn from(settings: &figtales_core::StorySettings) -> Self {
        Self::new(*settings.story_count(), *settings.criteria_count())
    }
}

impl From<&figtales_core::GenerationRequest> for StoryShape {
    fn from(request: &figtales_core::GenerationRequest) -> Self {
        let (story_count, criteria_count) = request.shape();
        Self::new(story_count, criteria_count)
    }
}

/// Cut `text` to at most `max` characters, ending in `...` when shortened.
///
/// # Examples
///
/// ```
/// use figtales_parser::truncate_chars;
///
/// assert_eq!(truncate_chars("short", 10), "short");
/// assert_eq!(truncate_chars("abcdefghij", 8), "abcde...");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Produce exactly `shape.story_count` stories of `shape.criteria_count` criteria.
///
/// Extra blocks are dropped, missing ones become placeholder stories, and
/// every story and criterion gets a fresh id.
pub fn normalize(extracted: &[ExtractedStory], shape: StoryShape) -> Vec<UserStory> {
    let story_count = shape.story_count as usize;
    let criteria_count = shape.criteria_count as usize;

    let mut stories: Vec<UserStory> = extracted
        .iter()
        .take(story_count)
        .enumerate()
        .map(|(i, story)| normalize_one(story, i + 1, criteria_count))
        .collect();

    if stories.len() < story_count {
        tracing::debug!(
            extracted = stories.len(),
            expected = story_count,
            "Padding with placeholder stories"
        );
    }
    while stories.len() < story_count {
        stories.push(placeholder_story(stories.len() + 1, criteria_count));
    }
    stories
}

fn normalize_one(story: &ExtractedStory, index: usize, criteria_count: usize) -> UserStory {
    let title = story
        .title()
        .clone()
        .unwrap_or_else(|| format!("User Story {index}"));
    let description = story
        .description()
        .clone()
        .unwrap_or_else(|| placeholder_description(index));

    let mut criteria: Vec<AcceptanceCriterion> = story
        .criteria()
        .iter()
        .take(criteria_count)
        .map(AcceptanceCriterion::new)
        .collect();
    while criteria.len() < criteria_count {
        criteria.push(AcceptanceCriterion::new(format!(
            "Acceptance criterion {}",
            criteria.len() + 1
        )));
    }

    UserStory::new(
        truncate_chars(&title, TITLE_MAX_CHARS),
        truncate_chars(&description, DESCRIPTION_MAX_CHARS),
        criteria,
    )
}

fn placeholder_description(index: usize) -> String {
    format!("This is a placeholder for User Story {index}.")
}

fn placeholder_story(index: usize, criteria_count: usize) -> UserStory {
    let criteria = (1..=criteria_count)
        .map(|j| AcceptanceCriterion::new(format!("Acceptance criterion {j} for story {index}")))
        .collect();
    UserStory::new(
        format!("User Story {index}"),
        placeholder_description(index),
        criteria,
    )
}
