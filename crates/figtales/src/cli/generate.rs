//! Generation and history command handlers.

use super::commands::OutputFormat;
use super::context::AppContext;
use super::stories::print_stories;
use figtales::{
    FigtalesResult, GenerationOrchestrator, completion_service_from_config,
    load_history,
};

/// Generate stories from the session's files and print them.
pub async fn generate_stories(ctx: &mut AppContext, format: OutputFormat) -> FigtalesResult<()> {
    let completion = completion_service_from_config(&ctx.config.completion)?;
    tracing::info!(
        provider = completion.provider_name(),
        model = completion.model_name(),
        files = ctx.session.files().len(),
        "Generating stories"
    );

    let orchestrator = GenerationOrchestrator::new(completion, ctx.notifier.clone())
        .with_history(ctx.history());
    let outcome = orchestrator.generate(&mut ctx.session).await?;
    tracing::debug!(
        generated = outcome.generated(),
        expected = outcome.expected(),
        "Generation finished"
    );

    print_stories(ctx.session.stories(), format)
}

/// Print the most recent history entries for the identified user.
pub async fn show_history(ctx: &mut AppContext, limit: usize) -> FigtalesResult<()> {
    let Some(identity) = ctx.session.identity().cloned() else {
        println!("History is kept only for identified users. Pass --user <name>.");
        return Ok(());
    };

    let history = ctx.history();
    let count = load_history(history.as_ref(), &mut ctx.session, ctx.notifier.as_ref()).await?;
    if count == 0 {
        println!("No history for {identity}.");
        return Ok(());
    }

    for entry in ctx.session.history().iter().take(limit) {
        println!(
            "{}  {}  {} stories x {} criteria  ({})",
            entry.timestamp().format("%Y-%m-%d %H:%M:%S"),
            entry.id(),
            entry.settings().story_count(),
            entry.settings().criteria_count(),
            entry.settings().user_type()
        );
        for story in entry.stories() {
            println!("    - {}", story.title());
        }
    }
    Ok(())
}
