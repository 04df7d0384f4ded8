//! Routes and handlers.

use crate::cors::with_cors;
use crate::wire::{ErrorBody, GenerateStoriesRequest, GenerateStoriesResponse};
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use figtales_core::{
    EncodedImage, GenerationRequestBuilder, SettingsUpdate, StorySettings, UserStory,
    fallback_prompt,
};
use figtales_error::{CompletionError, ServerError, ServerErrorKind};
use figtales_interface::CompletionService;
use figtales_parser::{StoryShape, parse_stories};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// Shared handler state.
#[derive(Clone)]
pub struct ApiState {
    completion: Arc<dyn CompletionService>,
}

impl ApiState {
    /// State answering with `completion`.
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }
}

/// Build the endpoint router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/generate-stories",
            post(generate_stories).options(preflight),
        )
        .layer(middleware::map_response(with_cors))
        .with_state(state)
}

/// Bind `address` and serve until the process stops.
///
/// # Errors
///
/// `Bind` when the address cannot be bound, `Serve` when the server fails.
pub async fn serve(address: &str, state: ApiState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.to_string(),
            reason: e.to_string(),
        })
    })?;
    serve_listener(listener, state).await
}

/// Serve on an already bound listener.
///
/// # Errors
///
/// `Serve` when the server fails.
pub async fn serve_listener(listener: TcpListener, state: ApiState) -> Result<(), ServerError> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, "Story endpoint listening");
    }
    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, derive_more::From)]
enum Failure {
    Server(ServerError),
    Completion(CompletionError),
}

impl Failure {
    fn message(&self) -> String {
        match self {
            Failure::Server(e) => e.kind.to_string(),
            Failure::Completion(e) => e.kind.to_string(),
        }
    }
}

async fn generate_stories(State(state): State<ApiState>, body: Bytes) -> Response {
    match generate(&state, &body).await {
        Ok(stories) => (StatusCode::OK, Json(GenerateStoriesResponse { stories })).into_response(),
        Err(failure) => {
            let message = failure.message();
            error!(error = %message, "Error processing request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response()
        }
    }
}

#[instrument(skip_all, fields(bytes = body.len()))]
async fn generate(state: &ApiState, body: &[u8]) -> Result<Vec<UserStory>, Failure> {
    let request: GenerateStoriesRequest = serde_json::from_slice(body)
        .map_err(|e| ServerError::new(ServerErrorKind::InvalidRequest(e.to_string())))?;

    if request.images().is_empty() {
        return Err(ServerError::new(ServerErrorKind::NoImages).into());
    }

    let settings = validated_settings(&request)?;
    info!(
        stories = settings.story_count(),
        criteria = settings.criteria_count(),
        images = request.images().len(),
        "Generating user stories"
    );

    let images = request
        .images()
        .iter()
        .enumerate()
        .map(|(index, url)| {
            EncodedImage::from_data_url(url).ok_or_else(|| {
                ServerError::new(ServerErrorKind::InvalidRequest(format!(
                    "image {index} is not a base64 data URL"
                )))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let prompt = request
        .prompt()
        .clone()
        .unwrap_or_else(|| fallback_prompt(*settings.story_count(), *settings.criteria_count()));

    let mut builder = GenerationRequestBuilder::default();
    builder
        .prompt(prompt)
        .images(images)
        .story_count(*settings.story_count())
        .criteria_count(*settings.criteria_count())
        .user_type(settings.user_type().clone());
    if let Some(audience) = settings.audience_type() {
        builder.audience_type(audience.clone());
    }
    let generation = builder
        .build()
        .map_err(|e| ServerError::new(ServerErrorKind::InvalidRequest(e.to_string())))?;

    let text = state.completion.complete(&generation).await?;
    info!(length = text.len(), "Generated text");

    Ok(parse_stories(&text, StoryShape::from(&generation)))
}

fn validated_settings(request: &GenerateStoriesRequest) -> Result<StorySettings, ServerError> {
    let mut update = SettingsUpdate::new()
        .story_count(*request.story_count())
        .criteria_count(*request.criteria_count())
        .audience_type(request.audience_type().clone());
    if let Some(user_type) = request.user_type() {
        update = update.user_type(user_type.clone());
    }

    let mut settings = StorySettings::default();
    let report = settings.apply(update);
    match report.rejected().first() {
        Some(rejection) => Err(ServerError::new(ServerErrorKind::InvalidRequest(format!(
            "invalid {}: '{}'",
            rejection.field, rejection.value
        )))),
        None => Ok(settings),
    }
}
