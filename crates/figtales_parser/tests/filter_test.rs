//! Tests for the story validity filter.

use figtales_core::{AcceptanceCriterion, UserStory};
use figtales_parser::{StoryShape, filter_stories, is_valid_story, parse_stories};

fn story(title: &str, description: &str, criteria: usize) -> UserStory {
    UserStory::new(
        title,
        description,
        (0..criteria)
            .map(|i| AcceptanceCriterion::new(format!("criterion {i}")))
            .collect(),
    )
}

#[test]
fn test_title_must_start_with_as_a() {
    assert!(is_valid_story(&story("As a user, I want X", "d", 2), 2));
    assert!(!is_valid_story(&story("User Story 1", "d", 2), 2));
    assert!(!is_valid_story(&story("as a user, I want X", "d", 2), 2));
}

#[test]
fn test_summary_preamble_is_rejected() {
    assert!(!is_valid_story(
        &story("As a reminder, Here are 5 user stories", "d", 2),
        2
    ));
}

#[test]
fn test_description_and_criteria_requirements() {
    assert!(!is_valid_story(&story("As a user", "  ", 2), 2));
    assert!(!is_valid_story(&story("As a user", "d", 1), 2));
    assert!(is_valid_story(&story("As a user", "d", 3), 2));
}

#[test]
fn test_filter_preserves_order_and_counts_drops() {
    let stories = vec![
        story("As a user, first", "d", 1),
        story("Here are stories", "d", 1),
        story("As an admin, second", "d", 1),
        story("As a user, third", "d", 1),
    ];
    let outcome = filter_stories(stories, 1);
    let titles: Vec<&str> = outcome.kept.iter().map(|s| s.title().as_str()).collect();
    assert_eq!(
        titles,
        vec!["As a user, first", "As an admin, second", "As a user, third"]
    );
    assert_eq!(outcome.dropped, 1);
}

#[test]
fn test_placeholders_never_pass_the_filter() {
    let stories = parse_stories("", StoryShape::new(4, 2));
    let outcome = filter_stories(stories, 2);
    assert!(outcome.kept.is_empty());
    assert_eq!(outcome.dropped, 4);
}
