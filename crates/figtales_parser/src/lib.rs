//! Turns free-text model output into well-formed user stories.
//!
//! Parsing is a pipeline of pure, total stages:
//!
//! 1. [`segment`] splits raw text on story headings into candidate blocks.
//! 2. [`extract`] applies independent line rules to each block.
//! 3. [`normalize`] forces the result to an exact [`StoryShape`].
//!
//! None of these stages can fail. Missing structure degrades to
//! placeholder content, so a poor response still yields a usable list.
//! [`filter_stories`] is a separate semantic check run by the caller.
//!
//! # Examples
//!
//! ```
//! use figtales_parser::{StoryShape, parse_stories};
//!
//! let stories = parse_stories("", StoryShape::new(3, 2));
//! assert_eq!(stories.len(), 3);
//! assert_eq!(stories[0].title(), "User Story 1");
//! assert_eq!(stories[2].criteria().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod filter;
mod normalize;
mod segment;

pub use extract::{ExtractedStory, extract, extract_criteria, extract_description, extract_title};
pub use filter::{FilterOutcome, filter_stories, is_valid_story};
pub use normalize::{StoryShape, normalize, truncate_chars};
pub use segment::segment;

use figtales_core::UserStory;

/// Segment, extract and normalize `text` into exactly `shape.story_count` stories.
#[tracing::instrument(skip(text), fields(text_len = text.len(), story_count = shape.story_count, criteria_count = shape.criteria_count))]
pub fn parse_stories(text: &str, shape: StoryShape) -> Vec<UserStory> {
    let blocks = segment(text, shape.story_count as usize);
    let extracted: Vec<ExtractedStory> = blocks.into_iter().map(extract).collect();
    tracing::debug!(blocks = extracted.len(), "Extracted story blocks");
    normalize(&extracted, shape)
}
