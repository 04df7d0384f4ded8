//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// Figtales - turn UI design screenshots into user stories
#[derive(Parser, Debug)]
#[command(name = "figtales")]
#[command(about = "Turn UI design screenshots into user stories with acceptance criteria", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding session state, history and shares
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Identify as this user; enables generation history
    #[arg(long, global = true)]
    pub user: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage uploaded design files
    #[command(subcommand)]
    Files(FileCommands),

    /// Show or change story settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Generate stories from the uploaded files
    Generate {
        /// Output format for the generated stories
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show, copy or export the current stories
    #[command(subcommand)]
    Stories(StoryCommands),

    /// Share stories by link
    #[command(subcommand)]
    Share(ShareCommands),

    /// Show generation history for `--user`
    History {
        /// Maximum number of entries to display
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Remove all files and stories and purge saved state
    Clear,

    /// Run the HTTP story generation endpoint
    Serve {
        /// Address to listen on, overriding configuration
        #[arg(long)]
        bind: Option<String>,
    },
}

/// File subcommands
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Add design files from disk
    Add {
        /// Image files to add
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Add one design file read from stdin
    Paste {
        /// Name for the pasted file, e.g. "screen.png"
        #[arg(long)]
        name: String,

        /// MIME type, guessed from the name when absent
        #[arg(long)]
        mime_type: Option<String>,
    },

    /// Remove a design file by id
    Remove {
        /// File id as shown by `files list`
        id: Uuid,
    },

    /// List design files
    List,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,

    /// Change one or more settings
    Set {
        /// Number of stories to generate (1-15)
        #[arg(long)]
        story_count: Option<u32>,

        /// Acceptance criteria per story (1-8)
        #[arg(long)]
        criteria_count: Option<u32>,

        /// Kind of user the stories are written for
        #[arg(long)]
        user_type: Option<String>,

        /// Audience the stories target
        #[arg(long, conflicts_with = "clear_audience")]
        audience_type: Option<String>,

        /// Remove the target audience
        #[arg(long)]
        clear_audience: bool,
    },
}

/// Story subcommands
#[derive(Subcommand, Debug)]
pub enum StoryCommands {
    /// Print the current stories
    Show {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print all stories as plain text for pasting elsewhere
    Copy,

    /// Write the stories as CSV
    Export {
        /// Destination file; stdout when absent
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Share subcommands
#[derive(Subcommand, Debug)]
pub enum ShareCommands {
    /// Create a share link for the current stories
    Create,

    /// Print the stories behind a share id
    Show {
        /// Share id from a link
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
