//! Tests for the file-backed history and share repositories.

use chrono::{Duration, Utc};
use figtales_core::{
    AcceptanceCriterion, GenerationHistoryEntry, Identity, StorySettings, UserStory,
};
use figtales_error::PersistenceErrorKind;
use figtales_interface::{HistoryRepository, ShareRepository};
use figtales_storage::{FileHistoryRepository, FileShareRepository};

fn sample_stories() -> Vec<UserStory> {
    vec![UserStory::new(
        "As a user, I want to log in, so that I can access my account",
        "Login screen",
        vec![AcceptanceCriterion::new("Login form displayed")],
    )]
}

#[tokio::test]
async fn test_history_is_newest_first() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileHistoryRepository::new(dir.path().join("history"));
    let alice = Identity::new("alice");

    let older = GenerationHistoryEntry::at(
        Utc::now() - Duration::hours(1),
        sample_stories(),
        StorySettings::default(),
    );
    let newer = GenerationHistoryEntry::new(sample_stories(), StorySettings::default());
    repo.save(&alice, &older).await?;
    repo.save(&alice, &newer).await?;

    let entries = repo.list(&alice).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id(), newer.id());
    assert_eq!(entries[1].id(), older.id());
    assert_eq!(entries[0].stories(), newer.stories());
    Ok(())
}

#[tokio::test]
async fn test_history_is_per_user() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileHistoryRepository::new(dir.path());
    let entry = GenerationHistoryEntry::new(sample_stories(), StorySettings::default());
    repo.save(&Identity::new("alice"), &entry).await?;

    assert!(repo.list(&Identity::new("bob")).await?.is_empty());
    assert_eq!(repo.list(&Identity::new("alice")).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_history_rejects_unsafe_user_id() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileHistoryRepository::new(dir.path());
    let entry = GenerationHistoryEntry::new(sample_stories(), StorySettings::default());

    let err = repo
        .save(&Identity::new("../escape"), &entry)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, PersistenceErrorKind::HistorySave(_)));
    Ok(())
}

#[tokio::test]
async fn test_anonymous_share_is_persisted() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileShareRepository::new(dir.path().join("shares"));
    let stories = sample_stories();

    let id = repo.create(None, &stories).await?;
    let record = repo.fetch_record(&id).await?;
    assert!(record.owner().is_none());
    assert_eq!(record.stories(), &stories);
    assert_eq!(repo.fetch(&id).await?, stories);
    Ok(())
}

#[tokio::test]
async fn test_owned_share_records_owner() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileShareRepository::new(dir.path());
    let alice = Identity::new("alice");

    let id = repo.create(Some(&alice), &sample_stories()).await?;
    let record = repo.fetch_record(&id).await?;
    assert_eq!(record.owner().as_ref(), Some(&alice));
    Ok(())
}

#[tokio::test]
async fn test_unknown_share_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = FileShareRepository::new(dir.path());

    let err = repo.fetch("not-a-uuid").await.unwrap_err();
    assert!(matches!(err.kind, PersistenceErrorKind::ShareFetch(_)));

    let err = repo
        .fetch("6f1c1c6e-8d43-4c5e-9a94-1f6b7d2f0a11")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, PersistenceErrorKind::ShareFetch(_)));
    Ok(())
}
