//! Figtales CLI binary.
//!
//! This binary provides command-line access to Figtales:
//! - Add design screenshots and tune story settings
//! - Generate user stories from the designs
//! - Copy, export and share the stories
//! - Serve the HTTP story generation endpoint

use clap::Parser;
use cli::{
    AppContext, Cli, Commands, generate_stories, handle_file_command, handle_settings_command,
    handle_share_command, handle_story_command, run_server, show_history,
};
use figtales::telemetry::init_console_telemetry;
use figtales::{ConsoleNotifier, FigtalesResult, Notifier};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the API key
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_console_telemetry(cli.global.verbose)?;

    let mut ctx = AppContext::open(&cli.global)?;

    if let Err(e) = run(&mut ctx, cli.command).await {
        tracing::debug!(error = ?e, "Command failed");
        if let Some(notification) = ConsoleNotifier::failure(&e) {
            ctx.notifier.notify(notification);
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(ctx: &mut AppContext, command: Commands) -> FigtalesResult<()> {
    match command {
        Commands::Files(file_cmd) => handle_file_command(ctx, file_cmd).await,
        Commands::Settings(settings_cmd) => handle_settings_command(ctx, settings_cmd),
        Commands::Generate { format } => generate_stories(ctx, format).await,
        Commands::Stories(story_cmd) => handle_story_command(ctx, story_cmd).await,
        Commands::Share(share_cmd) => handle_share_command(ctx, share_cmd).await,
        Commands::History { limit } => show_history(ctx, limit).await,
        Commands::Clear => {
            ctx.session.clear_files();
            tracing::info!("Session cleared");
            Ok(())
        }
        Commands::Serve { bind } => run_server(ctx, bind).await,
    }
}
