//! End-to-end workflow through the facade: ingest, generate, export, share, reload.

use async_trait::async_trait;
use figtales::{
    CSV_HEADER, CompletionError, CompletionService, ConfigError, ConfigErrorKind, ConsoleNotifier,
    FigtalesConfig, FigtalesError, FileShareRepository, FileSystemStore, GenerationError,
    GenerationErrorKind, GenerationOrchestrator, GenerationRequest, Notification, NotificationLevel,
    PersistenceError, PersistenceErrorKind, SessionError, SessionErrorKind, SessionStore,
    ShareService, TracingNotifier, ingest_paths, to_csv,
};
use std::sync::Arc;

const RESPONSE: &str = "\
Here are the user stories for your designs.

User Story 1: As a traveler, I want to pick seats, so that I can sit with my family
The seat map highlights free seats.
Acceptance Criteria:
1. Free seats are highlighted
2. Selected seats show a check mark

User Story 2: As a traveler, I want to see fares, so that I can compare prices
Acceptance Criteria:
- Fares are listed per class
- The cheapest fare is marked
";

struct FixedCompletion;

#[async_trait]
impl CompletionService for FixedCompletion {
    async fn complete(&self, _request: &GenerationRequest) -> Result<String, CompletionError> {
        Ok(RESPONSE.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-1"
    }
}

#[tokio::test]
async fn test_upload_generate_export_share_reload() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = FigtalesConfig::bundled()?;
    let design = dir.path().join("seats.png");
    std::fs::write(&design, [0x89, 0x50, 0x4E, 0x47])?;

    let durable = Arc::new(FileSystemStore::new(dir.path().join("session"))?);
    let mut session = SessionStore::open(durable, config.defaults.story_settings());
    let mut report = ingest_paths(&[design], &config.upload).await;
    assert!(report.rejected().is_empty());
    session.add_files(report.take_accepted());
    session.update_settings(figtales::SettingsUpdate::new().story_count(3).criteria_count(2));

    let orchestrator =
        GenerationOrchestrator::new(Arc::new(FixedCompletion), Arc::new(TracingNotifier));
    let outcome = orchestrator.generate(&mut session).await?;
    // The preamble takes a slot and is filtered out
    assert_eq!(*outcome.generated(), 2);
    assert_eq!(*outcome.expected(), 3);
    assert!(session.stories()[0].title().starts_with("As a traveler, I want to pick seats"));

    let csv = to_csv(session.stories());
    assert!(csv.starts_with(CSV_HEADER));
    assert!(csv.contains("\"Free seats are highlighted | Selected seats show a check mark\""));
    assert!(csv.ends_with("\"Fares are listed per class | The cheapest fare is marked\"\n"));

    let shares = ShareService::new(
        Arc::new(FileShareRepository::new(dir.path().join("shares"))),
        config.session.share_origin.clone(),
        Arc::new(TracingNotifier),
    );
    let link = shares.create_link(&session).await?;
    assert!(link.url().starts_with("http://localhost:8080/share/"));
    assert_eq!(shares.fetch(link.id()).await?, session.stories());

    let stories = session.stories().to_vec();
    drop(session);
    let reopened = SessionStore::open(
        Arc::new(FileSystemStore::new(dir.path().join("session"))?),
        config.defaults.story_settings(),
    );
    assert_eq!(reopened.stories(), stories.as_slice());
    assert_eq!(*reopened.settings().story_count(), 3);
    assert_eq!(reopened.files()[0].name(), "seats.png");
    Ok(())
}

#[test]
fn test_console_notifier_rendering() {
    assert_eq!(
        ConsoleNotifier::render(&Notification::success("Stories generated")),
        "[ok] Stories generated"
    );
    assert_eq!(
        ConsoleNotifier::render(
            &Notification::error("No design files")
                .with_description("Please upload at least one design file before generating stories.")
        ),
        "[error] No design files\n  Please upload at least one design file before generating stories."
    );
}

#[test]
fn test_command_failures_are_reported_once() {
    let generation = FigtalesError::from(GenerationError::new(GenerationErrorKind::NoInput));
    assert!(ConsoleNotifier::failure(&generation).is_none());

    let rejected = FigtalesError::from(ConfigError::new(ConfigErrorKind::InvalidSetting {
        field: "criteriaCount".into(),
        value: "9".into(),
    }));
    assert!(ConsoleNotifier::failure(&rejected).is_none());

    let empty = FigtalesError::from(SessionError::new(SessionErrorKind::NoStories));
    let notification = ConsoleNotifier::failure(&empty).expect("unannounced failure");
    assert_eq!(notification.level(), &NotificationLevel::Error);
    assert_eq!(notification.title(), "Command failed");

    let missing_share = FigtalesError::from(PersistenceError::new(PersistenceErrorKind::ShareFetch(
        "unknown".into(),
    )));
    assert!(ConsoleNotifier::failure(&missing_share).is_some());
}

#[test]
fn test_default_log_filter() {
    assert_eq!(figtales::telemetry::DEFAULT_FILTER, "info,figtales=debug");
}
