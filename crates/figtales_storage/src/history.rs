//! File-backed generation history.

use crate::validate_key;
use async_trait::async_trait;
use figtales_core::{GenerationHistoryEntry, Identity};
use figtales_error::{PersistenceError, PersistenceErrorKind};
use figtales_interface::HistoryRepository;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// History repository storing one JSON array per user at `{dir}/{user_id}.json`.
///
/// Entries are kept newest first.
#[derive(Debug)]
pub struct FileHistoryRepository {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileHistoryRepository {
    /// Repository rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn user_path(&self, identity: &Identity) -> Option<PathBuf> {
        validate_key(identity.user_id()).ok()?;
        Some(self.dir.join(format!("{}.json", identity.user_id())))
    }

    async fn read_entries(path: &Path) -> Result<Vec<GenerationHistoryEntry>, String> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| e.to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(format!("{}: {}", path.display(), e)),
        }
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    #[tracing::instrument(skip(self, entry), fields(user = %identity, entry_id = %entry.id()))]
    async fn save(
        &self,
        identity: &Identity,
        entry: &GenerationHistoryEntry,
    ) -> Result<(), PersistenceError> {
        let fail = |reason: String| PersistenceError::new(PersistenceErrorKind::HistorySave(reason));
        let path = self
            .user_path(identity)
            .ok_or_else(|| fail(format!("invalid user id '{}'", identity.user_id())))?;

        let _guard = self.write_lock.lock().await;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| fail(format!("{}: {}", self.dir.display(), e)))?;

        let mut entries = Self::read_entries(&path).await.map_err(fail)?;
        entries.insert(0, entry.clone());

        let contents = serde_json::to_string_pretty(&entries).map_err(|e| fail(e.to_string()))?;
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|e| fail(format!("{}: {}", temp_path.display(), e)))?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| fail(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(entries = entries.len(), "Saved history entry");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user = %identity))]
    async fn list(&self, identity: &Identity) -> Result<Vec<GenerationHistoryEntry>, PersistenceError> {
        let fail = |reason: String| PersistenceError::new(PersistenceErrorKind::HistoryFetch(reason));
        let path = self
            .user_path(identity)
            .ok_or_else(|| fail(format!("invalid user id '{}'", identity.user_id())))?;

        let mut entries = Self::read_entries(&path).await.map_err(fail)?;
        entries.sort_by(|a, b| b.timestamp().cmp(a.timestamp()));
        tracing::debug!(entries = entries.len(), "Loaded history");
        Ok(entries)
    }
}
