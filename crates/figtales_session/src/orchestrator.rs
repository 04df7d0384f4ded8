//! End-to-end story generation.

use crate::{SessionStore, load_history};
use derive_getters::Getters;
use figtales_core::{
    DesignFile, EncodedImage, GenerationHistoryEntry, GenerationRequest, Notification,
    StorySettings, UserStory,
};
use figtales_error::{GenerationError, GenerationErrorKind, PersistenceError};
use figtales_interface::{CompletionService, HistoryRepository, Notifier};
use figtales_parser::{StoryShape, filter_stories, parse_stories};
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Where a generation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum GenerationPhase {
    /// Nothing in flight
    Idle,
    /// Checking preconditions
    Validating,
    /// Converting files to transport form
    Encoding,
    /// Waiting on the completion service
    AwaitingCompletion,
    /// Turning raw text into stories
    Parsing,
    /// Dropping stories that fail the validity check
    Filtering,
    /// Saving history
    Persisting,
    /// The last generation failed
    Error,
}

/// Summary of a successful generation.
#[derive(Debug, Clone, Getters)]
pub struct GenerationOutcome {
    /// Stories published to the session
    generated: usize,
    /// Stories requested
    expected: usize,
    /// History save failure, if the save was attempted and failed
    history_error: Option<PersistenceError>,
}

/// Drives one generation at a time against a [`SessionStore`].
pub struct GenerationOrchestrator {
    completion: Arc<dyn CompletionService>,
    history: Option<Arc<dyn HistoryRepository>>,
    notifier: Arc<dyn Notifier>,
    phase: watch::Sender<GenerationPhase>,
}

impl GenerationOrchestrator {
    /// Orchestrator without history persistence.
    pub fn new(completion: Arc<dyn CompletionService>, notifier: Arc<dyn Notifier>) -> Self {
        let (phase, _) = watch::channel(GenerationPhase::Idle);
        Self {
            completion,
            history: None,
            notifier,
            phase,
        }
    }

    /// Save history for identified sessions through `history`.
    pub fn with_history(mut self, history: Arc<dyn HistoryRepository>) -> Self {
        self.history = Some(history);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> GenerationPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes every phase change.
    pub fn subscribe(&self) -> watch::Receiver<GenerationPhase> {
        self.phase.subscribe()
    }

    fn enter(&self, phase: GenerationPhase) {
        debug!(phase = %phase, "Generation phase");
        self.phase.send_replace(phase);
    }

    /// Generate stories from the session's files and settings.
    ///
    /// On success the filtered stories replace the session's stories. On any
    /// failure exactly one error notification is sent and no story state is
    /// touched. A history save failure is reported separately and does not
    /// fail the generation.
    ///
    /// # Errors
    ///
    /// - `GenerationInProgress` when the session already has a generation in flight
    /// - `NoInput` when the session has no files
    /// - `Encoding` when a file cannot be read
    /// - `CompletionService` when the completion call fails
    #[instrument(skip_all, fields(provider = self.completion.provider_name(), model = self.completion.model_name()))]
    pub async fn generate(
        &self,
        session: &mut SessionStore,
    ) -> Result<GenerationOutcome, GenerationError> {
        let _guard = match session.begin_generation() {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Generation already in progress");
                self.notifier.notify(
                    Notification::error("Generation already in progress")
                        .with_description("Please wait for the current generation to finish."),
                );
                return Err(e);
            }
        };

        self.enter(GenerationPhase::Validating);
        if session.files().is_empty() {
            self.notifier.notify(
                Notification::error("No design files").with_description(
                    "Please upload at least one design file before generating stories.",
                ),
            );
            self.enter(GenerationPhase::Idle);
            return Err(GenerationError::new(GenerationErrorKind::NoInput));
        }

        let settings = session.settings().clone();
        let stories = match self.produce(session.files(), &settings).await {
            Ok(stories) => stories,
            Err(e) => {
                error!(error = %e, "Story generation failed");
                self.enter(GenerationPhase::Error);
                self.notifier.notify(
                    Notification::error("Failed to generate stories").with_description(e.kind.to_string()),
                );
                return Err(e);
            }
        };

        let expected = *settings.story_count() as usize;
        let generated = stories.len();
        if generated < expected {
            warn!(expected, generated, "Fewer valid stories than requested");
            self.notifier.notify(
                Notification::warning(format!(
                    "Expected {expected} user stories, but only {generated} valid stories were generated."
                ))
                .with_description("Displaying the available stories. Please try again if you need more."),
            );
        }
        session.set_stories(stories.clone());

        self.enter(GenerationPhase::Persisting);
        let history_error = self.save_history(session, stories, settings).await.err();

        self.enter(GenerationPhase::Idle);
        info!(generated, expected, "Stories generated");
        self.notifier.notify(
            Notification::success("Stories generated").with_description(format!(
                "{generated} user stories created based on your designs."
            )),
        );

        Ok(GenerationOutcome {
            generated,
            expected,
            history_error,
        })
    }

    async fn produce(
        &self,
        files: &[DesignFile],
        settings: &StorySettings,
    ) -> Result<Vec<UserStory>, GenerationError> {
        self.enter(GenerationPhase::Encoding);
        let images = try_join_all(files.iter().map(encode_file)).await?;
        debug!(images = images.len(), "Encoded design files");

        self.enter(GenerationPhase::AwaitingCompletion);
        let request = GenerationRequest::from_settings(settings, images);
        let text = self.completion.complete(&request).await?;

        self.enter(GenerationPhase::Parsing);
        let parsed = parse_stories(&text, StoryShape::from(&request));

        self.enter(GenerationPhase::Filtering);
        let outcome = filter_stories(parsed, *settings.criteria_count());
        debug!(kept = outcome.kept.len(), dropped = outcome.dropped, "Filtered stories");
        Ok(outcome.kept)
    }

    async fn save_history(
        &self,
        session: &mut SessionStore,
        stories: Vec<UserStory>,
        settings: StorySettings,
    ) -> Result<(), PersistenceError> {
        let Some(identity) = session.identity().cloned() else {
            return Ok(());
        };
        let entry = GenerationHistoryEntry::new(stories, settings);

        if let Some(history) = &self.history {
            if let Err(e) = history.save(&identity, &entry).await {
                error!(error = %e, user = %identity, "Failed to save generation history");
                self.notifier.notify(
                    Notification::error("Failed to save generation history")
                        .with_description(e.kind.to_string()),
                );
                return Err(e);
            }
        }
        session.push_history(entry);
        Ok(())
    }

    /// Load the identified user's history into the session, newest first.
    ///
    /// Without an identity or a history repository this does nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns `HistoryFetch` when the repository fails; the session history is unchanged.
    pub async fn refresh_history(&self, session: &mut SessionStore) -> Result<usize, PersistenceError> {
        match &self.history {
            Some(history) => load_history(history.as_ref(), session, self.notifier.as_ref()).await,
            None => Ok(0),
        }
    }
}

async fn encode_file(file: &DesignFile) -> Result<EncodedImage, GenerationError> {
    if !file.payload().is_empty() {
        return Ok(EncodedImage::from_bytes(file.mime_type().clone(), file.payload()));
    }

    let encoding_error = |reason: String| {
        GenerationError::new(GenerationErrorKind::Encoding {
            file: file.name().clone(),
            reason,
        })
    };

    let path = file
        .source_path()
        .as_ref()
        .ok_or_else(|| encoding_error("file has no content".to_string()))?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| encoding_error(format!("{}: {}", path.display(), e)))?;
    if bytes.is_empty() {
        return Err(encoding_error(format!("{} is empty", path.display())));
    }
    Ok(EncodedImage::from_bytes(file.mime_type().clone(), &bytes))
}
