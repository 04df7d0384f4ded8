//! Share links for the current stories.

use crate::SessionStore;
use figtales_core::{Notification, ShareLink, UserStory};
use figtales_error::{PersistenceError, PersistenceErrorKind};
use figtales_interface::{Notifier, ShareRepository};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Publishes stories through a [`ShareRepository`] and builds their links.
pub struct ShareService {
    repository: Arc<dyn ShareRepository>,
    origin: String,
    notifier: Arc<dyn Notifier>,
}

impl ShareService {
    /// Service building links on `origin`, e.g. `https://figtales.example`.
    pub fn new(
        repository: Arc<dyn ShareRepository>,
        origin: impl Into<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            origin: origin.into(),
            notifier,
        }
    }

    /// Share the session's current stories.
    ///
    /// Anonymous sessions can share; the record simply has no owner.
    ///
    /// # Errors
    ///
    /// `NoStories` when there is nothing to share, `ShareCreate` when the
    /// repository fails.
    #[instrument(skip_all)]
    pub async fn create_link(&self, session: &SessionStore) -> Result<ShareLink, PersistenceError> {
        if session.stories().is_empty() {
            self.notifier.notify(
                Notification::error("No stories to share")
                    .with_description("Generate some stories before creating a share link."),
            );
            return Err(PersistenceError::new(PersistenceErrorKind::NoStories));
        }

        match self
            .repository
            .create(session.identity(), session.stories())
            .await
        {
            Ok(id) => {
                let link = ShareLink::new(&self.origin, id);
                info!(url = %link.url(), "Share link created");
                self.notifier.notify(
                    Notification::success("Share link created")
                        .with_description(link.url().clone()),
                );
                Ok(link)
            }
            Err(e) => {
                error!(error = %e, "Failed to create share link");
                self.notifier.notify(
                    Notification::error("Failed to create share link")
                        .with_description(e.kind.to_string()),
                );
                Err(e)
            }
        }
    }

    /// Stories behind a share id.
    ///
    /// # Errors
    ///
    /// `ShareFetch` when the id is unknown or the repository fails.
    pub async fn fetch(&self, id: &str) -> Result<Vec<UserStory>, PersistenceError> {
        self.repository.fetch(id).await
    }
}
