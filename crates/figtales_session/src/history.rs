//! Loading per-user history into a session.

use crate::SessionStore;
use figtales_core::Notification;
use figtales_error::PersistenceError;
use figtales_interface::{HistoryRepository, Notifier};
use tracing::{debug, error, instrument};

/// Replace the session history with the identified user's stored entries.
///
/// Without an identity this does nothing and returns 0.
///
/// # Errors
///
/// Returns `HistoryFetch` when the repository fails; the session history is
/// unchanged and one error notification is sent.
#[instrument(skip_all)]
pub async fn load_history(
    repository: &dyn HistoryRepository,
    session: &mut SessionStore,
    notifier: &dyn Notifier,
) -> Result<usize, PersistenceError> {
    let Some(identity) = session.identity().cloned() else {
        debug!("No identity, skipping history fetch");
        return Ok(0);
    };
    match repository.list(&identity).await {
        Ok(entries) => {
            let count = entries.len();
            session.replace_history(entries);
            Ok(count)
        }
        Err(e) => {
            error!(error = %e, user = %identity, "Failed to load history");
            notifier.notify(
                Notification::error("Failed to load history").with_description(e.kind.to_string()),
            );
            Err(e)
        }
    }
}
