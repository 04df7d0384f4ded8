//! Splitting raw text into story blocks.

use regex::Regex;
use std::sync::LazyLock;

static STORY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[*_#]*\s*\b(?:user\s+story|story)\s*#?\d+\s*:?[*_]*:?\s*").expect("Valid story heading regex")
});

/// Split `text` on story headings such as `User Story 2:` or `Story #3`.
///
/// Markdown emphasis and heading marks around the heading are consumed with it.
///
/// Blocks are trimmed; empty blocks are dropped and at most `limit` are returned.
///
/// # Examples
///
/// ```
/// use figtales_parser::segment;
///
/// let text = "User Story 1: As a user, I want A\nStory #2: As a user, I want B";
/// let blocks = segment(text, 5);
/// assert_eq!(blocks, vec!["As a user, I want A", "As a user, I want B"]);
/// ```
pub fn segment(text: &str, limit: usize) -> Vec<&str> {
    STORY_HEADING
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .take(limit)
        .collect()
}
