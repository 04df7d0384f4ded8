//! HTTP endpoint command handler.

use super::context::AppContext;
use figtales::{ApiState, FigtalesResult, completion_service_from_config, serve};

/// Run the story generation endpoint until the process stops.
pub async fn run_server(ctx: &AppContext, bind: Option<String>) -> FigtalesResult<()> {
    let completion = completion_service_from_config(&ctx.config.completion)?;
    let bind = bind.unwrap_or_else(|| ctx.config.server.bind.clone());

    tracing::info!(bind = %bind, model = completion.model_name(), "Starting story endpoint");
    serve(&bind, ApiState::new(completion)).await?;
    Ok(())
}
