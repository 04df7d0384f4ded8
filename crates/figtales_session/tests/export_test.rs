//! Tests for clipboard text and CSV export.

use figtales_core::{AcceptanceCriterion, UserStory};
use figtales_session::{CSV_HEADER, story_text, to_copy_text, to_csv};

fn login() -> UserStory {
    UserStory::new(
        "As a user, I want to log in",
        "Login screen",
        vec![
            AcceptanceCriterion::new("Form displayed"),
            AcceptanceCriterion::new("Errors shown"),
        ],
    )
}

#[test]
fn test_story_text_numbers_criteria() {
    assert_eq!(
        story_text(&login()),
        "As a user, I want to log in\nLogin screen\n\nAcceptance Criteria:\n1. Form displayed\n2. Errors shown"
    );
}

#[test]
fn test_copy_text_separates_stories() {
    let text = to_copy_text(&[login(), login()]);
    let separator = format!("\n\n{}\n\n", "-".repeat(40));

    assert_eq!(text.matches(&separator).count(), 1);
    assert!(!text.ends_with(&separator));
    assert_eq!(text, format!("{}{}{}", story_text(&login()), separator, story_text(&login())));
}

#[test]
fn test_copy_text_of_nothing_is_empty() {
    assert_eq!(to_copy_text(&[]), "");
}

#[test]
fn test_csv_quotes_and_joins_criteria() {
    let story = UserStory::new(
        "As a \"power\" user, I want shortcuts",
        "Keyboard, everywhere",
        vec![
            AcceptanceCriterion::new("Ctrl+K opens search"),
            AcceptanceCriterion::new("Esc closes it"),
        ],
    );

    let csv = to_csv(&[story]);

    assert!(csv.starts_with(CSV_HEADER));
    assert_eq!(
        &csv[CSV_HEADER.len()..],
        "\"As a \"\"power\"\" user, I want shortcuts\",\"Keyboard, everywhere\",\"Ctrl+K opens search | Esc closes it\"\n"
    );
}

#[test]
fn test_csv_of_nothing_is_header_only() {
    assert_eq!(to_csv(&[]), "Title,Description,Acceptance Criteria\n");
}
