//! Trait definitions for completion backends and persistence collaborators.

use async_trait::async_trait;
use figtales_core::{GenerationHistoryEntry, GenerationRequest, Identity, Notification, NotificationLevel, UserStory};
use figtales_error::{CompletionError, PersistenceError};

/// A generative image-to-text model.
///
/// One call per generation; implementations do not retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send the prompt and images, returning the model's raw text.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, CompletionError>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-1.5-flash").
    fn model_name(&self) -> &str;
}

/// Durable per-user generation history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append an entry for `identity`.
    async fn save(
        &self,
        identity: &Identity,
        entry: &GenerationHistoryEntry,
    ) -> Result<(), PersistenceError>;

    /// All entries for `identity`, newest first.
    async fn list(&self, identity: &Identity) -> Result<Vec<GenerationHistoryEntry>, PersistenceError>;
}

/// Durable storage for shared story collections.
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Persist `stories`, returning the share id. `owner` is `None` for anonymous shares.
    async fn create(
        &self,
        owner: Option<&Identity>,
        stories: &[UserStory],
    ) -> Result<String, PersistenceError>;

    /// Stories stored under `id`.
    async fn fetch(&self, id: &str) -> Result<Vec<UserStory>, PersistenceError>;
}

/// Surface for user-visible messages.
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

/// Notifier that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description().as_deref().unwrap_or("");
        match notification.level() {
            NotificationLevel::Success => {
                tracing::info!(title = %notification.title(), description, "Notification")
            }
            NotificationLevel::Warning => {
                tracing::warn!(title = %notification.title(), description, "Notification")
            }
            NotificationLevel::Error => {
                tracing::error!(title = %notification.title(), description, "Notification")
            }
        }
    }
}
