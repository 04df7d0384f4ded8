//! Layered TOML configuration for Figtales.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Bundled defaults (include_str! from figtales.toml)
//! 2. `~/.config/figtales/figtales.toml`
//! 3. `./figtales.toml`
//!
//! [`FigtalesConfig::from_file`] loads an explicit file over the bundled defaults instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;

pub use loader::{
    CompletionConfig, DefaultsConfig, FigtalesConfig, ServerConfig, SessionConfig, UploadConfig,
};
