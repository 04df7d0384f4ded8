//! Notifications rendered on the terminal.

use figtales_core::{Notification, NotificationLevel};
use figtales_error::{ConfigErrorKind, FigtalesError, FigtalesErrorKind, PersistenceErrorKind};
use figtales_interface::Notifier;

/// Writes notifications to stderr so stdout stays free for command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Render `notification` as it is printed.
    pub fn render(notification: &Notification) -> String {
        let marker = match notification.level() {
            NotificationLevel::Success => "ok",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        match notification.description() {
            Some(description) => format!("[{marker}] {}\n  {description}", notification.title()),
            None => format!("[{marker}] {}", notification.title()),
        }
    }

    /// The notification for a failed command, or `None` when the failing
    /// operation already announced it.
    pub fn failure(err: &FigtalesError) -> Option<Notification> {
        let announced = match err.kind() {
            FigtalesErrorKind::Generation(_) | FigtalesErrorKind::Ingest(_) => true,
            FigtalesErrorKind::Persistence(e) => {
                !matches!(e.kind, PersistenceErrorKind::ShareFetch(_))
            }
            FigtalesErrorKind::Config(e) => {
                matches!(e.kind, ConfigErrorKind::InvalidSetting { .. })
            }
            _ => false,
        };
        (!announced).then(|| Notification::error("Command failed").with_description(err.to_string()))
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }
}
