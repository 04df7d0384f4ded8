//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the figtales binary.

mod commands;
mod context;
mod files;
mod generate;
mod serve;
mod settings;
mod stories;

pub use commands::{Cli, Commands};
pub use context::AppContext;
pub use files::handle_file_command;
pub use generate::{generate_stories, show_history};
pub use serve::run_server;
pub use settings::handle_settings_command;
pub use stories::{handle_share_command, handle_story_command};
