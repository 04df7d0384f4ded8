//! Configuration structures and loading.

use config::{Config, File, FileFormat};
use figtales_core::{SettingsUpdate, StorySettings};
use figtales_error::{ConfigError, ConfigErrorKind, FigtalesError, FigtalesResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

const DEFAULT_CONFIG: &str = include_str!("../../../figtales.toml");

/// Completion service settings.
///
/// ```toml
/// [completion]
/// model = "gemini-1.5-flash"
/// api_key_env = "GOOGLE_AI_API_KEY"
/// temperature = 0.4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Provider name; only "gemini" is supported
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Base URL that `{model}:generateContent` is appended to
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling
    pub top_k: u32,
    /// Nucleus sampling
    pub top_p: f32,
    /// Output token cap
    pub max_output_tokens: u32,
}

/// Starting values for [`StorySettings`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Stories per generation
    pub story_count: u32,
    /// Criteria per story
    pub criteria_count: u32,
    /// Target user type
    pub user_type: String,
    /// Optional audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_type: Option<String>,
}

impl DefaultsConfig {
    /// Settings built from these defaults.
    ///
    /// Values outside the allowed ranges are logged and replaced by the
    /// built-in defaults.
    pub fn story_settings(&self) -> StorySettings {
        let mut settings = StorySettings::default();
        let report = settings.apply(
            SettingsUpdate::new()
                .story_count(self.story_count)
                .criteria_count(self.criteria_count)
                .user_type(self.user_type.clone())
                .audience_type(self.audience_type.clone()),
        );
        for rejection in report.rejected() {
            warn!(field = %rejection.field, value = %rejection.value, "Ignoring invalid default setting");
        }
        settings
    }
}

/// Upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Most files accepted by one ingest
    pub max_files: usize,
    /// Largest accepted file in bytes
    pub max_file_bytes: u64,
    /// Accepted file extensions, lowercase
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_file_bytes: 10 * 1024 * 1024,
            accepted_extensions: ["png", "jpg", "jpeg", "svg", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl UploadConfig {
    /// Whether `extension` is accepted, ignoring case.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }
}

/// Session persistence and sharing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory for mirrored state, history and shares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
    /// Origin that share links are built on
    pub share_origin: String,
}

impl SessionConfig {
    /// The configured state directory, or the platform data directory.
    pub fn resolve_state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("figtales"))
                .unwrap_or_else(|| PathBuf::from(".figtales"))
        })
    }
}

/// HTTP endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

/// Top-level Figtales configuration.
///
/// # Example
///
/// ```no_run
/// use figtales_config::FigtalesConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FigtalesConfig::load()?;
/// println!("Model: {}", config.completion.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FigtalesConfig {
    /// Completion service
    pub completion: CompletionConfig,
    /// Default story settings
    pub defaults: DefaultsConfig,
    /// Upload limits
    #[serde(default)]
    pub upload: UploadConfig,
    /// Session persistence
    pub session: SessionConfig,
    /// HTTP endpoint
    pub server: ServerConfig,
}

impl FigtalesConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    #[instrument]
    pub fn load() -> FigtalesResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/figtales/figtales.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("figtales").required(false));

        Self::finish(builder)
    }

    /// Load `path` layered over the bundled defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FigtalesResult<Self> {
        debug!("Loading configuration from file");
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Parse TOML text layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> FigtalesResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// The bundled defaults alone.
    pub fn bundled() -> FigtalesResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> FigtalesResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                FigtalesError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                FigtalesError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })?;

        if config.completion.provider != "gemini" {
            return Err(ConfigError::new(ConfigErrorKind::UnsupportedProvider(
                config.completion.provider.clone(),
            ))
            .into());
        }

        debug!(model = %config.completion.model, "Configuration loaded");
        Ok(config)
    }
}
