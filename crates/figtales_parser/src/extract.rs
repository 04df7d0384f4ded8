//! Line-oriented extraction rules.
//!
//! Each rule is independent and returns an optional match; fallbacks are
//! applied later by the normalizer.

use derive_getters::Getters;
use regex::Regex;
use std::sync::LazyLock;

static TITLE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:title|as\s+an?|i\s+want|so\s+that)\b").expect("Valid title keyword regex")
});

static TITLE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^title\s*:?\s*").expect("Valid title label regex"));

static CRITERIA_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)acceptance\s+criteria").expect("Valid criteria marker regex"));

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+[.)]\s*|[-*•]\s+)(\S.*?)\s*$").expect("Valid list item regex")
});

/// What the rules found in one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ExtractedStory {
    /// Title line, if a heading keyword was found
    title: Option<String>,
    /// Text before the criteria marker, if non-empty
    description: Option<String>,
    /// Criteria list items in order
    criteria: Vec<String>,
}

impl ExtractedStory {
    /// Assemble from individual rule results.
    pub fn new(title: Option<String>, description: Option<String>, criteria: Vec<String>) -> Self {
        Self {
            title,
            description,
            criteria,
        }
    }
}

/// Run every rule over `block`.
pub fn extract(block: &str) -> ExtractedStory {
    ExtractedStory::new(
        extract_title(block),
        extract_description(block),
        extract_criteria(block),
    )
}

/// First line containing a heading keyword, from the keyword onward.
///
/// A leading `Title:` label and markdown emphasis are removed.
///
/// # Examples
///
/// ```
/// use figtales_parser::extract_title;
///
/// let block = "**Title:** As a shopper, I want to filter results\nDetails";
/// assert_eq!(
///     extract_title(block).as_deref(),
///     Some("As a shopper, I want to filter results")
/// );
/// assert_eq!(extract_title("nothing here"), None);
/// ```
pub fn extract_title(block: &str) -> Option<String> {
    block.lines().find_map(|line| {
        let line = line.replace("**", "").replace("__", "");
        let found = TITLE_KEYWORD.find(&line)?;
        let title = TITLE_LABEL.replace(line[found.start()..].trim(), "");
        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Everything before the first `acceptance criteria` marker, trimmed.
pub fn extract_description(block: &str) -> Option<String> {
    let description = match CRITERIA_MARKER.find(block) {
        Some(marker) => &block[..marker.start()],
        None => block,
    };
    let description = description.trim();
    (!description.is_empty()).then(|| description.to_string())
}

/// Numbered or bulleted list items, markers stripped.
///
/// Only lines after the `acceptance criteria` marker count when one is present.
///
/// # Examples
///
/// ```
/// use figtales_parser::extract_criteria;
///
/// let block = "Intro\n- not a criterion\nAcceptance Criteria:\n1. First\n2) Second\n• Third";
/// assert_eq!(extract_criteria(block), vec!["First", "Second", "Third"]);
/// ```
pub fn extract_criteria(block: &str) -> Vec<String> {
    let section = match CRITERIA_MARKER.find(block) {
        Some(marker) => &block[marker.end()..],
        None => block,
    };
    section
        .lines()
        .filter_map(|line| LIST_ITEM.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|item| item.as_str().to_string())
        .collect()
}
