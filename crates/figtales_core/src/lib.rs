//! Core data types for the Figtales user story generator.
//!
//! This crate provides the foundation data types shared by the parser, the
//! completion clients, the session store and the HTTP endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod history;
mod image;
mod notification;
mod request;
mod settings;
mod share;
mod story;

pub use file::{DesignFile, PreviewHandle};
pub use history::{GenerationHistoryEntry, Identity};
pub use image::EncodedImage;
pub use notification::{Notification, NotificationLevel};
pub use request::{
    GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError, fallback_prompt,
    story_prompt,
};
pub use settings::{
    CRITERIA_COUNT_RANGE, STORY_COUNT_RANGE, SettingsField, SettingsRejection, SettingsReport,
    SettingsUpdate, StorySettings,
};
pub use share::ShareLink;
pub use story::{AcceptanceCriterion, UserStory};
