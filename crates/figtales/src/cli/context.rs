//! State shared by command handlers.

use super::commands::GlobalArgs;
use figtales::{
    ConsoleNotifier, FigtalesConfig, FigtalesResult, FileHistoryRepository, FileShareRepository,
    FileSystemStore, Identity, SessionStore,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Loaded configuration, the open session and its repositories.
pub struct AppContext {
    pub config: FigtalesConfig,
    pub session: SessionStore,
    pub state_dir: PathBuf,
    pub notifier: Arc<ConsoleNotifier>,
}

impl AppContext {
    /// Load configuration and open the session under the state directory.
    pub fn open(global: &GlobalArgs) -> FigtalesResult<Self> {
        let config = match &global.config {
            Some(path) => FigtalesConfig::from_file(path)?,
            None => FigtalesConfig::load()?,
        };
        let state_dir = global
            .state_dir
            .clone()
            .unwrap_or_else(|| config.session.resolve_state_dir());
        debug!(state_dir = %state_dir.display(), "Opening session");

        let durable = Arc::new(FileSystemStore::new(state_dir.join("session"))?);
        let mut session = SessionStore::open(durable, config.defaults.story_settings());
        session.set_identity(global.user.as_deref().map(Identity::new));

        Ok(Self {
            config,
            session,
            state_dir,
            notifier: Arc::new(ConsoleNotifier),
        })
    }

    /// History repository under the state directory.
    pub fn history(&self) -> Arc<FileHistoryRepository> {
        Arc::new(FileHistoryRepository::new(self.state_dir.join("history")))
    }

    /// Share repository under the state directory.
    pub fn shares(&self) -> Arc<FileShareRepository> {
        Arc::new(FileShareRepository::new(self.state_dir.join("shares")))
    }
}
