//! User stories and their acceptance criteria.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One testable condition of a user story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AcceptanceCriterion {
    /// Unique identifier
    id: Uuid,
    /// What must hold
    description: String,
}

impl AcceptanceCriterion {
    /// Create a criterion with a fresh id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
        }
    }
}

/// A user story: "As a [user], I want to [action], so that [benefit]".
///
/// # Examples
///
/// ```
/// use figtales_core::{AcceptanceCriterion, UserStory};
///
/// let story = UserStory::new(
///     "As a user, I want to log in, so that I can access my account",
///     "Login screen with email and password",
///     vec![AcceptanceCriterion::new("Login form displayed")],
/// );
/// assert!(story.title().starts_with("As a"));
/// assert_eq!(story.criteria().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct UserStory {
    /// Unique identifier
    id: Uuid,
    /// Story sentence
    title: String,
    /// Supporting description
    description: String,
    /// Ordered acceptance criteria
    criteria: Vec<AcceptanceCriterion>,
}

impl UserStory {
    /// Create a story with a fresh id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        criteria: Vec<AcceptanceCriterion>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            criteria,
        }
    }

    /// Criterion descriptions in order.
    pub fn criteria_text(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.description.as_str()).collect()
    }
}
