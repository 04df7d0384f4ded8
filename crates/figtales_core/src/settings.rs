//! Generation settings and validated partial updates.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed number of stories per generation.
pub const STORY_COUNT_RANGE: RangeInclusive<u32> = 1..=15;

/// Allowed number of acceptance criteria per story.
pub const CRITERIA_COUNT_RANGE: RangeInclusive<u32> = 1..=8;

/// Shape and audience of the stories to generate.
///
/// A `StorySettings` value is always valid: construction goes through
/// [`StorySettings::default`] or [`StorySettings::apply`], both of which
/// respect the declared ranges.
///
/// # Examples
///
/// ```
/// use figtales_core::StorySettings;
///
/// let settings = StorySettings::default();
/// assert_eq!(*settings.story_count(), 5);
/// assert_eq!(*settings.criteria_count(), 3);
/// assert_eq!(settings.user_type(), "user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StorySettings {
    /// Number of stories to request, within [`STORY_COUNT_RANGE`]
    story_count: u32,
    /// Criteria per story, within [`CRITERIA_COUNT_RANGE`]
    criteria_count: u32,
    /// Kind of user the stories are written for
    user_type: String,
    /// Optional audience the stories target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audience_type: Option<String>,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            story_count: 5,
            criteria_count: 3,
            user_type: "user".to_string(),
            audience_type: None,
        }
    }
}

impl StorySettings {
    /// Whether every field lies within its declared range.
    ///
    /// Deserialized settings bypass [`StorySettings::apply`], so values read
    /// back from storage must be checked with this before use.
    pub fn is_valid(&self) -> bool {
        STORY_COUNT_RANGE.contains(&self.story_count)
            && CRITERIA_COUNT_RANGE.contains(&self.criteria_count)
            && !self.user_type.trim().is_empty()
    }

    /// Shallow-merge a partial update, validating each field on its own.
    ///
    /// Out-of-range values are ignored rather than clamped; the prior value
    /// is kept and the rejection is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use figtales_core::{SettingsField, SettingsUpdate, StorySettings};
    ///
    /// let mut settings = StorySettings::default();
    /// let report = settings.apply(SettingsUpdate::new().story_count(8).criteria_count(9));
    ///
    /// assert_eq!(*settings.story_count(), 8);
    /// assert_eq!(*settings.criteria_count(), 3);
    /// assert_eq!(report.rejected()[0].field, SettingsField::CriteriaCount);
    /// ```
    pub fn apply(&mut self, update: SettingsUpdate) -> SettingsReport {
        let mut report = SettingsReport::default();

        if let Some(count) = update.story_count {
            if STORY_COUNT_RANGE.contains(&count) {
                self.story_count = count;
                report.applied.push(SettingsField::StoryCount);
            } else {
                report.reject(SettingsField::StoryCount, count.to_string());
            }
        }

        if let Some(count) = update.criteria_count {
            if CRITERIA_COUNT_RANGE.contains(&count) {
                self.criteria_count = count;
                report.applied.push(SettingsField::CriteriaCount);
            } else {
                report.reject(SettingsField::CriteriaCount, count.to_string());
            }
        }

        if let Some(user_type) = update.user_type {
            let trimmed = user_type.trim();
            if trimmed.is_empty() {
                report.reject(SettingsField::UserType, user_type);
            } else {
                self.user_type = trimmed.to_string();
                report.applied.push(SettingsField::UserType);
            }
        }

        if let Some(audience) = update.audience_type {
            self.audience_type = audience
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty());
            report.applied.push(SettingsField::AudienceType);
        }

        report
    }
}

/// A partial settings change; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    /// New story count
    #[serde(default)]
    pub story_count: Option<u32>,
    /// New criteria count
    #[serde(default)]
    pub criteria_count: Option<u32>,
    /// New user type
    #[serde(default)]
    pub user_type: Option<String>,
    /// New audience; `Some(None)` clears it
    #[serde(default)]
    pub audience_type: Option<Option<String>>,
}

impl SettingsUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the story count.
    pub fn story_count(mut self, count: u32) -> Self {
        self.story_count = Some(count);
        self
    }

    /// Set the criteria count.
    pub fn criteria_count(mut self, count: u32) -> Self {
        self.criteria_count = Some(count);
        self
    }

    /// Set the user type.
    pub fn user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    /// Set or clear the audience.
    pub fn audience_type(mut self, audience: Option<String>) -> Self {
        self.audience_type = Some(audience);
        self
    }

    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.story_count.is_none()
            && self.criteria_count.is_none()
            && self.user_type.is_none()
            && self.audience_type.is_none()
    }
}

/// Settings fields that can be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SettingsField {
    /// `storyCount`
    #[display("storyCount")]
    StoryCount,
    /// `criteriaCount`
    #[display("criteriaCount")]
    CriteriaCount,
    /// `userType`
    #[display("userType")]
    UserType,
    /// `audienceType`
    #[display("audienceType")]
    AudienceType,
}

/// A field value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRejection {
    /// Field that was rejected
    pub field: SettingsField,
    /// The offered value
    pub value: String,
}

/// Outcome of [`StorySettings::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SettingsReport {
    /// Fields that changed
    applied: Vec<SettingsField>,
    /// Fields that were ignored
    rejected: Vec<SettingsRejection>,
}

impl SettingsReport {
    fn reject(&mut self, field: SettingsField, value: String) {
        self.rejected.push(SettingsRejection { field, value });
    }

    /// Whether any offered value was ignored.
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}
