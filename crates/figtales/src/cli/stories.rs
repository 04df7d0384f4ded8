//! Story and share command handlers.

use super::commands::{OutputFormat, ShareCommands, StoryCommands};
use super::context::AppContext;
use figtales::{
    FigtalesResult, JsonError, Notification, Notifier, SessionError, SessionErrorKind,
    ShareService, UserStory, to_copy_text, to_csv,
};

/// Print `stories` in `format`.
pub fn print_stories(stories: &[UserStory], format: OutputFormat) -> FigtalesResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(stories)
                .map_err(|e| JsonError::new("render stories", e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{}", to_copy_text(stories));
        }
    }
    Ok(())
}

fn require_stories(ctx: &AppContext) -> FigtalesResult<&[UserStory]> {
    let stories = ctx.session.stories();
    if stories.is_empty() {
        return Err(SessionError::new(SessionErrorKind::NoStories).into());
    }
    Ok(stories)
}

/// Handle story commands.
pub async fn handle_story_command(ctx: &mut AppContext, cmd: StoryCommands) -> FigtalesResult<()> {
    match cmd {
        StoryCommands::Show { format } => print_stories(require_stories(ctx)?, format),

        StoryCommands::Copy => {
            println!("{}", to_copy_text(require_stories(ctx)?));
            Ok(())
        }

        StoryCommands::Export { output } => {
            let csv = to_csv(require_stories(ctx)?);
            match output {
                Some(path) => {
                    tokio::fs::write(&path, csv).await.map_err(|e| {
                        figtales::StorageError::new(figtales::StorageErrorKind::Write(format!(
                            "{}: {}",
                            path.display(),
                            e
                        )))
                    })?;
                    ctx.notifier.notify(
                        Notification::success("CSV file written")
                            .with_description(path.display().to_string()),
                    );
                }
                None => print!("{}", csv),
            }
            Ok(())
        }
    }
}

/// Handle share commands.
pub async fn handle_share_command(ctx: &mut AppContext, cmd: ShareCommands) -> FigtalesResult<()> {
    let service = ShareService::new(
        ctx.shares(),
        ctx.config.session.share_origin.clone(),
        ctx.notifier.clone(),
    );
    match cmd {
        ShareCommands::Create => {
            let link = service.create_link(&ctx.session).await?;
            println!("{}", link.url());
            Ok(())
        }

        ShareCommands::Show { id, format } => {
            let stories = service.fetch(&id).await?;
            print_stories(&stories, format)
        }
    }
}
