//! Tests for share link creation.

use figtales_core::{AcceptanceCriterion, Identity, StorySettings, UserStory};
use figtales_error::PersistenceErrorKind;
use figtales_interface::TracingNotifier;
use figtales_session::{SessionStore, ShareService};
use figtales_storage::{FileShareRepository, MemoryStore};
use std::sync::Arc;

fn story() -> UserStory {
    UserStory::new(
        "As a user, I want to share stories",
        "Share dialog",
        vec![AcceptanceCriterion::new("Link copied")],
    )
}

#[tokio::test]
async fn test_share_without_stories_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let service = ShareService::new(
        Arc::new(FileShareRepository::new(dir.path())),
        "http://localhost:8080",
        Arc::new(TracingNotifier),
    );
    let session = SessionStore::open(Arc::new(MemoryStore::new()), StorySettings::default());

    let err = service.create_link(&session).await.unwrap_err();

    assert_eq!(err.kind, PersistenceErrorKind::NoStories);
    Ok(())
}

#[tokio::test]
async fn test_anonymous_share_round_trips() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Arc::new(FileShareRepository::new(dir.path()));
    let service = ShareService::new(
        repository.clone(),
        "https://figtales.example/",
        Arc::new(TracingNotifier),
    );
    let mut session = SessionStore::open(Arc::new(MemoryStore::new()), StorySettings::default());
    session.set_stories(vec![story()]);

    let link = service.create_link(&session).await?;

    assert_eq!(link.url(), &format!("https://figtales.example/share/{}", link.id()));
    assert_eq!(service.fetch(link.id()).await?, session.stories().to_vec());
    let record = repository.fetch_record(link.id()).await?;
    assert!(record.owner().is_none());
    Ok(())
}

#[tokio::test]
async fn test_identified_share_records_owner() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Arc::new(FileShareRepository::new(dir.path()));
    let service = ShareService::new(repository.clone(), "http://localhost:8080", Arc::new(TracingNotifier));
    let mut session = SessionStore::open(Arc::new(MemoryStore::new()), StorySettings::default());
    session.set_stories(vec![story()]);
    session.set_identity(Some(Identity::new("alice")));

    let link = service.create_link(&session).await?;

    let record = repository.fetch_record(link.id()).await?;
    assert_eq!(record.owner().as_ref().map(Identity::user_id), Some("alice"));
    Ok(())
}
