//! File-backed shared story collections.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use figtales_core::{Identity, UserStory};
use figtales_error::{PersistenceError, PersistenceErrorKind};
use figtales_interface::ShareRepository;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A persisted share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SharedStories {
    id: String,
    owner: Option<Identity>,
    created_at: DateTime<Utc>,
    stories: Vec<UserStory>,
}

/// Share repository storing each share at `{dir}/{id}.json`.
///
/// Anonymous shares are stored too, with no owner.
#[derive(Debug, Clone)]
pub struct FileShareRepository {
    dir: PathBuf,
}

impl FileShareRepository {
    /// Repository rooted at `dir`. The directory is created on first share.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load the full share record, including owner and creation time.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_record(&self, id: &str) -> Result<SharedStories, PersistenceError> {
        let fail = |reason: String| PersistenceError::new(PersistenceErrorKind::ShareFetch(reason));
        let id = Uuid::parse_str(id).map_err(|e| fail(format!("invalid share id '{id}': {e}")))?;
        let path = self.dir.join(format!("{id}.json"));
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| fail(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents).map_err(|e| fail(e.to_string()))
    }
}

#[async_trait]
impl ShareRepository for FileShareRepository {
    #[tracing::instrument(skip(self, stories), fields(owner = ?owner.map(Identity::user_id), stories = stories.len()))]
    async fn create(
        &self,
        owner: Option<&Identity>,
        stories: &[UserStory],
    ) -> Result<String, PersistenceError> {
        let fail = |reason: String| PersistenceError::new(PersistenceErrorKind::ShareCreate(reason));

        let record = SharedStories {
            id: Uuid::new_v4().to_string(),
            owner: owner.cloned(),
            created_at: Utc::now(),
            stories: stories.to_vec(),
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| fail(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.dir.join(format!("{}.json", record.id));
        let contents = serde_json::to_string_pretty(&record).map_err(|e| fail(e.to_string()))?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| fail(format!("{}: {}", path.display(), e)))?;

        tracing::info!(share_id = %record.id, "Created share");
        Ok(record.id)
    }

    async fn fetch(&self, id: &str) -> Result<Vec<UserStory>, PersistenceError> {
        Ok(self.fetch_record(id).await?.stories)
    }
}
