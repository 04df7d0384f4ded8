#![cfg(feature = "gemini")]

//! Tests for the Gemini client against a local stand-in server.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
};
use figtales_config::FigtalesConfig;
use figtales_core::{EncodedImage, GenerationRequestBuilder, GenerationRequest};
use figtales_error::CompletionErrorKind;
use figtales_interface::CompletionService;
use figtales_models::GeminiClient;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Captured {
    call: String,
    key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Stub {
    captured: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
    body: Value,
}

async fn generate(
    State(stub): State<Stub>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.captured.lock().unwrap().push(Captured {
        call,
        key: query.get("key").cloned(),
        body,
    });
    (stub.status, Json(stub.body.clone()))
}

async fn spawn_stub(
    status: StatusCode,
    body: Value,
) -> anyhow::Result<(String, Arc<Mutex<Vec<Captured>>>)> {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        captured: captured.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/models/:call", post(generate))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}/models"), captured))
}

fn request() -> GenerationRequest {
    GenerationRequestBuilder::default()
        .prompt("Generate exactly 1 user stories")
        .images(vec![EncodedImage::new("image/png", "iVBORw0KGgo=")])
        .story_count(1)
        .criteria_count(2)
        .build()
        .unwrap()
}

fn client(endpoint: &str) -> GeminiClient {
    GeminiClient::new("test-key", "gemini-test").with_endpoint(endpoint)
}

#[tokio::test]
async fn test_success_returns_first_candidate_text() -> anyhow::Result<()> {
    let (endpoint, captured) = spawn_stub(
        StatusCode::OK,
        json!({
            "candidates": [
                {"content": {"parts": [{"text": "As a user, I want to log in"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }),
    )
    .await?;

    let text = client(&endpoint).complete(&request()).await?;
    assert_eq!(text, "As a user, I want to log in");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let call = &captured[0];
    assert_eq!(call.call, "gemini-test:generateContent");
    assert_eq!(call.key.as_deref(), Some("test-key"));

    let content = &call.body["contents"][0];
    assert_eq!(content["role"], "user");
    assert_eq!(content["parts"][0]["text"], "Generate exactly 1 user stories");
    assert_eq!(content["parts"][1]["inline_data"]["mime_type"], "image/png");
    assert_eq!(content["parts"][1]["inline_data"]["data"], "iVBORw0KGgo=");

    let config = &call.body["generationConfig"];
    assert_eq!(config["topK"], 32);
    assert_eq!(config["maxOutputTokens"], 8192);
    assert!((config["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_http_status() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"message": "boom"}}),
    )
    .await?;

    let err = client(&endpoint).complete(&request()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    match err.kind {
        CompletionErrorKind::HttpStatus { message, .. } => assert!(message.contains("boom")),
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_candidates() -> anyhow::Result<()> {
    for body in [json!({}), json!({"candidates": []})] {
        let (endpoint, _) = spawn_stub(StatusCode::OK, body).await?;
        let err = client(&endpoint).complete(&request()).await.unwrap_err();
        assert_eq!(err.kind, CompletionErrorKind::MissingCandidates);
    }
    Ok(())
}

#[tokio::test]
async fn test_candidate_without_text_is_malformed() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{}]}, "finishReason": "SAFETY"}]}),
    )
    .await?;

    let err = client(&endpoint).complete(&request()).await.unwrap_err();
    match err.kind {
        CompletionErrorKind::MalformedResponse(reason) => assert!(reason.contains("SAFETY")),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_malformed() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_stub(StatusCode::OK, json!("just a string")).await?;
    let err = client(&endpoint).complete(&request()).await.unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::MalformedResponse(_)));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let err = client("http://127.0.0.1:1/models")
        .complete(&request())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_empty_image_is_rejected_before_sending() -> anyhow::Result<()> {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, json!({})).await?;
    let request = GenerationRequestBuilder::default()
        .prompt("p")
        .images(vec![EncodedImage::new("image/png", "")])
        .story_count(1)
        .criteria_count(1)
        .build()?;

    let err = client(&endpoint).complete(&request).await.unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::InvalidImage(_)));
    assert!(captured.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_from_config_requires_api_key() -> anyhow::Result<()> {
    let mut config = FigtalesConfig::bundled()?.completion;
    config.api_key_env = "FIGTALES_TEST_UNSET_API_KEY".to_string();

    let err = GeminiClient::from_config(&config).unwrap_err();
    assert_eq!(
        err.kind,
        CompletionErrorKind::MissingApiKey("FIGTALES_TEST_UNSET_API_KEY".to_string())
    );
    Ok(())
}
