//! Identities and generation history.

use crate::{StorySettings, UserStory};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("{}", user_id)]
pub struct Identity {
    user_id: String,
}

impl Identity {
    /// Identity for the given user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// The user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// A snapshot of one successful generation.
///
/// Entries are append-only and listed newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationHistoryEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    stories: Vec<UserStory>,
    settings: StorySettings,
}

impl GenerationHistoryEntry {
    /// Snapshot the given stories and settings, stamped now.
    pub fn new(stories: Vec<UserStory>, settings: StorySettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            stories,
            settings,
        }
    }

    /// Same as [`GenerationHistoryEntry::new`] with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, stories: Vec<UserStory>, settings: StorySettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            stories,
            settings,
        }
    }
}
