//! Tests for the filesystem and in-memory key-value stores.

use figtales_storage::{
    FileSystemStore, KeyValueStore, MemoryStore, StorageErrorKind, StorageKey,
};
use strum::IntoEnumIterator;

#[test]
fn test_storage_key_names() {
    let keys: Vec<StorageKey> = StorageKey::iter().collect();
    let names: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
    assert_eq!(names, vec!["app_stories", "app_files", "app_settings"]);
    assert_eq!(StorageKey::Settings.to_string(), "app_settings");
}

#[test]
fn test_filesystem_store_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileSystemStore::new(dir.path().join("state"))?;

    assert!(store.get("app_stories")?.is_none());
    store.set("app_stories", r#"[{"title":"As a user"}]"#)?;
    assert_eq!(
        store.get("app_stories")?.as_deref(),
        Some(r#"[{"title":"As a user"}]"#)
    );
    assert!(dir.path().join("state/app_stories.json").exists());
    assert!(!dir.path().join("state/app_stories.json.tmp").exists());

    store.set("app_stories", "[]")?;
    assert_eq!(store.get("app_stories")?.as_deref(), Some("[]"));

    store.remove("app_stories")?;
    assert!(!store.contains("app_stories")?);
    store.remove("app_stories")?;
    Ok(())
}

#[test]
fn test_filesystem_store_survives_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    FileSystemStore::new(dir.path())?.set("app_settings", "{}")?;
    let reopened = FileSystemStore::new(dir.path())?;
    assert_eq!(reopened.get("app_settings")?.as_deref(), Some("{}"));
    Ok(())
}

#[test]
fn test_keys_cannot_escape_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileSystemStore::new(dir.path())?;
    let err = store.set("../outside", "x").unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::InvalidKey(_)));
    assert!(store.get("").is_err());
    Ok(())
}

#[test]
fn test_memory_store() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("app_files", "[]")?;
    store.set("app_stories", "[]")?;
    assert_eq!(store.len(), 2);
    store.remove("app_files")?;
    assert!(!store.contains("app_files")?);
    assert!(store.contains("app_stories")?);
    Ok(())
}
