//! Integration tests for GeminiProvider against a local fake of the
//! `generateContent` endpoint.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0 that answers with
//! a canned status and body and records what it received.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use promptcraft_core::{GenerationRequest, SectionLabel};
use promptcraft_service::{
    generate, BlockingProvider, CompletionProvider, CompletionSettings, GeminiProvider,
    GenerateError, ProviderError,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    call: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: Value,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<Captured>>>,
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.seen.lock().unwrap().push(Captured {
        call,
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });
    if let Some(delay) = fake.delay {
        tokio::time::sleep(delay).await;
    }
    (fake.status, Json(fake.reply.clone()))
}

/// Spawn the fake server, return its `/v1beta` base URL and the capture log.
async fn spawn_fake(
    status: StatusCode,
    reply: Value,
    delay: Option<Duration>,
) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = FakeGemini {
        status,
        reply,
        delay,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/v1beta/models/{call}", post(generate_content))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1beta"), seen)
}

fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

const STRUCTURED: &str = "DETECTED INTENT:\nWrite ads\n\nSUGGESTED PROMPT TYPE:\nCopywriting\n\nCOPY-PASTEABLE PROMPT TEMPLATE:\nWrite {count} ads for {product}\n\nUSAGE TIPS:\nBe specific\n";

#[tokio::test]
async fn complete_sends_prompt_key_and_temperature() {
    let (url, seen) = spawn_fake(StatusCode::OK, text_reply("hello"), None).await;
    let provider = GeminiProvider::new("secret-key")
        .with_base_url(&url)
        .with_model("gemini-test");

    let out = provider
        .complete("the prompt", CompletionSettings { temperature: 0.3 })
        .await
        .unwrap();
    assert_eq!(out, "hello");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].call, "gemini-test:generateContent");
    assert_eq!(seen[0].api_key.as_deref(), Some("secret-key"));
    assert_eq!(seen[0].body["contents"][0]["parts"][0]["text"], "the prompt");
    let t = seen[0].body["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((t - 0.3).abs() < 1e-6);
}

#[tokio::test]
async fn generate_end_to_end_sections_reply() {
    let (url, _seen) = spawn_fake(StatusCode::OK, text_reply(STRUCTURED), None).await;
    let provider = GeminiProvider::new("k").with_base_url(&url);

    let gen = generate(
        &provider,
        &GenerationRequest::new("ads for sneakers"),
        CompletionSettings::default(),
    )
    .await
    .unwrap();
    assert_eq!(gen.sections.trimmed(SectionLabel::DetectedIntent), "Write ads");
    assert_eq!(gen.sections.trimmed(SectionLabel::UsageTips), "Be specific");
}

#[tokio::test]
async fn api_error_message_is_extracted() {
    let body = json!({"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}});
    let (url, _seen) = spawn_fake(StatusCode::TOO_MANY_REQUESTS, body, None).await;
    let provider = GeminiProvider::new("k").with_base_url(&url);

    let err = provider
        .complete("p", CompletionSettings::default())
        .await
        .unwrap_err();
    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_key_is_credentials_error() {
    let body = json!({"error": {"code": 403, "message": "API key not valid"}});
    let (url, _seen) = spawn_fake(StatusCode::FORBIDDEN, body, None).await;
    let provider = GeminiProvider::new("bad").with_base_url(&url);

    let err = provider
        .complete("p", CompletionSettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MissingCredentials(ref m) if m == "API key not valid"));
}

#[tokio::test]
async fn no_candidates_is_empty_response() {
    let (url, _seen) = spawn_fake(StatusCode::OK, json!({"candidates": []}), None).await;
    let provider = GeminiProvider::new("k").with_base_url(&url);

    let err = generate(
        &provider,
        &GenerationRequest::new("x"),
        CompletionSettings::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GenerateError::Provider(ProviderError::EmptyResponse)));
}

#[tokio::test]
async fn slow_server_hits_timeout() {
    let (url, _seen) = spawn_fake(
        StatusCode::OK,
        text_reply("late"),
        Some(Duration::from_secs(5)),
    )
    .await;
    let provider = GeminiProvider::new("k")
        .with_base_url(&url)
        .with_timeout(Duration::from_millis(100));

    let err = provider
        .complete("p", CompletionSettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connection(_)));
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GeminiProvider::new("k").with_base_url(&format!("http://{addr}/v1beta"));
    let err = provider
        .complete("p", CompletionSettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connection(_)));
}

// ---- BlockingProvider ----
//
// The blocking wrapper owns its own runtime, so the fake server must run on a
// separate thread's runtime to avoid nesting.

fn spawn_fake_on_thread(reply: Value) -> String {
    let (tx, rx) = std::sync::mpsc::sync_channel(1);
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (url, _seen) = spawn_fake(StatusCode::OK, reply, None).await;
            tx.send(url).unwrap();
            std::future::pending::<()>().await;
        });
    });
    rx.recv().unwrap()
}

#[test]
fn blocking_provider_over_http() {
    let url = spawn_fake_on_thread(text_reply(STRUCTURED));
    let provider =
        BlockingProvider::new(Arc::new(GeminiProvider::new("k").with_base_url(&url))).unwrap();
    assert_eq!(provider.model_hint(), Some("gemini-2.5-flash"));

    let gen = provider
        .generate(&GenerationRequest::new("ads"), CompletionSettings::default())
        .unwrap();
    assert_eq!(gen.sections.trimmed(SectionLabel::SuggestedPromptType), "Copywriting");
}
