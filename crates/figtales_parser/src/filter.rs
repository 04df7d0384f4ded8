//! Semantic validity filter applied after normalization.

use figtales_core::UserStory;

/// Whether `story` looks like a real user story rather than filler.
///
/// The title must start with `As a` and must not contain `Here are`; the
/// description must be non-empty and there must be at least
/// `criteria_count` criteria.
pub fn is_valid_story(story: &UserStory, criteria_count: u32) -> bool {
    story.title().starts_with("As a")
        && !story.title().contains("Here are")
        && !story.description().trim().is_empty()
        && story.criteria().len() >= criteria_count as usize
}

/// Result of [`filter_stories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Stories that passed, in order
    pub kept: Vec<UserStory>,
    /// How many were dropped
    pub dropped: usize,
}

/// Keep only stories passing [`is_valid_story`], preserving order.
pub fn filter_stories(stories: Vec<UserStory>, criteria_count: u32) -> FilterOutcome {
    let total = stories.len();
    let kept: Vec<UserStory> = stories
        .into_iter()
        .filter(|story| {
            let valid = is_valid_story(story, criteria_count);
            if !valid {
                tracing::debug!(title = %story.title(), "Filtered out invalid story");
            }
            valid
        })
        .collect();
    let dropped = total - kept.len();
    FilterOutcome { kept, dropped }
}
