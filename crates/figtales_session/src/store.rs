//! The session state owner.

use crate::PreviewRegistry;
use figtales_core::{
    DesignFile, GenerationHistoryEntry, Identity, PreviewHandle, SettingsReport, SettingsUpdate,
    StorySettings, UserStory,
};
use figtales_error::{
    GenerationError, GenerationErrorKind, SessionError, SessionErrorKind, StoredStateError,
};
use figtales_storage::{KeyValueStore, StorageKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Owns files, settings, stories, history and identity for one session.
///
/// Every change to files, settings or stories is written through to the
/// durable store under its own [`StorageKey`]. A failed write is logged and
/// the in-memory value stays authoritative.
pub struct SessionStore {
    files: Vec<DesignFile>,
    settings: StorySettings,
    stories: Vec<UserStory>,
    history: Vec<GenerationHistoryEntry>,
    identity: Option<Identity>,
    previews: PreviewRegistry,
    generating: Arc<AtomicBool>,
    durable: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("files", &self.files.len())
            .field("settings", &self.settings)
            .field("stories", &self.stories.len())
            .field("history", &self.history.len())
            .field("identity", &self.identity)
            .field("generating", &self.is_generating())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open a session, seeding it from whatever `durable` holds.
    ///
    /// Each key is read once. Unreadable or malformed values are discarded
    /// and the corresponding default is used instead.
    #[instrument(skip_all)]
    pub fn open(durable: Arc<dyn KeyValueStore>, default_settings: StorySettings) -> Self {
        let mut files: Vec<DesignFile> = load_key(durable.as_ref(), StorageKey::Files).unwrap_or_default();
        let stories: Vec<UserStory> = load_key(durable.as_ref(), StorageKey::Stories).unwrap_or_default();
        let settings = load_key::<StorySettings>(durable.as_ref(), StorageKey::Settings)
            .and_then(|settings| {
                if settings.is_valid() {
                    Some(settings)
                } else {
                    let err = StoredStateError::new(StorageKey::Settings.as_ref(), "settings out of range");
                    debug!(error = %err, "Discarding stored settings");
                    None
                }
            })
            .unwrap_or(default_settings);

        let mut previews = PreviewRegistry::new();
        for file in &mut files {
            file.set_preview(Some(previews.issue()));
        }

        debug!(
            files = files.len(),
            stories = stories.len(),
            "Rehydrated session"
        );

        Self {
            files,
            settings,
            stories,
            history: Vec::new(),
            identity: None,
            previews,
            generating: Arc::new(AtomicBool::new(false)),
            durable,
        }
    }

    /// Uploaded files in insertion order.
    pub fn files(&self) -> &[DesignFile] {
        &self.files
    }

    /// Current settings.
    pub fn settings(&self) -> &StorySettings {
        &self.settings
    }

    /// Current stories.
    pub fn stories(&self) -> &[UserStory] {
        &self.stories
    }

    /// Generation history, newest first.
    pub fn history(&self) -> &[GenerationHistoryEntry] {
        &self.history
    }

    /// Authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether `handle` belongs to a file still in the session.
    pub fn preview_is_live(&self, handle: &PreviewHandle) -> bool {
        self.previews.is_live(handle)
    }

    /// Append files, issuing each a fresh preview handle.
    ///
    /// No deduplication is performed.
    #[instrument(skip_all, fields(count = files.len()))]
    pub fn add_files(&mut self, files: Vec<DesignFile>) {
        for mut file in files {
            file.set_preview(Some(self.previews.issue()));
            self.files.push(file);
        }
        self.persist_files();
    }

    /// Remove the file with `id`, releasing its preview handle.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` when no file has that id.
    #[instrument(skip(self))]
    pub fn remove_file(&mut self, id: Uuid) -> Result<DesignFile, SessionError> {
        let index = self
            .files
            .iter()
            .position(|file| *file.id() == id)
            .ok_or_else(|| SessionError::new(SessionErrorKind::FileNotFound(id.to_string())))?;

        let mut file = self.files.remove(index);
        if let Some(handle) = file.take_preview() {
            self.previews.release(&handle);
        }
        self.persist_files();
        Ok(file)
    }

    /// Shallow-merge `update` into the settings, validating each field.
    ///
    /// Out-of-range values keep the prior value and are listed in the report.
    #[instrument(skip(self))]
    pub fn update_settings(&mut self, update: SettingsUpdate) -> SettingsReport {
        let report = self.settings.apply(update);
        for rejection in report.rejected() {
            debug!(field = %rejection.field, value = %rejection.value, "Rejected settings value");
        }
        if !report.applied().is_empty() {
            self.persist(StorageKey::Settings, &self.settings);
        }
        report
    }

    /// Replace the current stories.
    pub fn set_stories(&mut self, stories: Vec<UserStory>) {
        self.stories = stories;
        self.persist(StorageKey::Stories, &self.stories);
    }

    /// Drop the current stories and their mirrored copy.
    pub fn clear_stored_stories(&mut self) {
        self.stories.clear();
        self.remove_key(StorageKey::Stories);
    }

    /// Release every preview, empty files and stories, and purge all mirrored keys.
    #[instrument(skip(self))]
    pub fn clear_files(&mut self) {
        for file in &mut self.files {
            file.take_preview();
        }
        self.previews.release_all();
        self.files.clear();
        self.stories.clear();
        for key in StorageKey::iter() {
            self.remove_key(key);
        }
        debug!("Cleared session");
    }

    /// Set or clear the authenticated identity.
    ///
    /// Changing identity drops the loaded history.
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        if self.identity != identity {
            self.history.clear();
        }
        self.identity = identity;
    }

    /// Prepend a history entry.
    pub fn push_history(&mut self, entry: GenerationHistoryEntry) {
        self.history.insert(0, entry);
    }

    /// Replace the history list.
    pub fn replace_history(&mut self, history: Vec<GenerationHistoryEntry>) {
        self.history = history;
    }

    /// Whether a generation is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// Mark a generation as in flight.
    ///
    /// The flag clears when the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns `GenerationInProgress` when a generation is already in flight.
    pub fn begin_generation(&self) -> Result<GenerationGuard, GenerationError> {
        self.generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GenerationError::new(GenerationErrorKind::GenerationInProgress))?;
        Ok(GenerationGuard {
            flag: Arc::clone(&self.generating),
        })
    }

    fn persist_files(&self) {
        self.persist(StorageKey::Files, &self.files);
    }

    fn persist<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize session state");
                return;
            }
        };
        if let Err(e) = self.durable.set(key.as_ref(), &json) {
            warn!(key = %key, error = %e, "Failed to persist session state");
        }
    }

    fn remove_key(&self, key: StorageKey) {
        if let Err(e) = self.durable.remove(key.as_ref()) {
            warn!(key = %key, error = %e, "Failed to purge session state");
        }
    }
}

/// Clears the in-progress flag when dropped.
#[derive(Debug)]
pub struct GenerationGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn load_key<T: DeserializeOwned>(durable: &dyn KeyValueStore, key: StorageKey) -> Option<T> {
    let raw = match durable.get(key.as_ref()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read stored session state");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            let err = StoredStateError::new(key.as_ref(), e.to_string());
            debug!(error = %err, "Discarding malformed stored state");
            None
        }
    }
}
