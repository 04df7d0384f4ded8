//! Clipboard and CSV renderings of stories.

use figtales_core::UserStory;

/// First line of every CSV export.
pub const CSV_HEADER: &str = "Title,Description,Acceptance Criteria\n";

const STORY_SEPARATOR: &str = "----------------------------------------";

/// One story as plain text with numbered criteria.
pub fn story_text(story: &UserStory) -> String {
    let mut text = format!(
        "{}\n{}\n\nAcceptance Criteria:",
        story.title(),
        story.description()
    );
    for (index, criterion) in story.criteria_text().iter().enumerate() {
        text.push_str(&format!("\n{}. {}", index + 1, criterion));
    }
    text
}

/// All stories as plain text, separated by a rule.
pub fn to_copy_text(stories: &[UserStory]) -> String {
    stories
        .iter()
        .map(story_text)
        .collect::<Vec<_>>()
        .join(&format!("\n\n{STORY_SEPARATOR}\n\n"))
}

/// All stories as CSV. Criteria share one column joined by ` | `.
pub fn to_csv(stories: &[UserStory]) -> String {
    let mut csv = String::from(CSV_HEADER);
    for story in stories {
        csv.push_str(&format!(
            "{},{},{}\n",
            quote(story.title()),
            quote(story.description()),
            quote(&story.criteria_text().join(" | "))
        ));
    }
    csv
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
