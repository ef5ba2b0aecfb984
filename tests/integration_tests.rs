//! Integration tests for the translation service
//!
//! These tests boot the real router on an ephemeral port, point the OpenAI client
//! at a wiremock server and drive the service over HTTP.

use polyglot_api::{build_orchestrator, config::Config, server};
use serde_json::{json, Value};
use std::net::SocketAddr;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

fn create_test_config(api_url: &str, echo_original: bool) -> Config {
    Config {
        openai_api_key: "test-openai-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        openai_api_url: api_url.to_string(),
        openai_temperature: 0.3,
        openai_max_tokens: 1000,
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        echo_original,
    }
}

fn create_openai_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ]
    })
}

/// Answer the completion whose system prompt is `system_prompt` with `content`, once.
async fn mount_translation(mock_server: &MockServer, system_prompt: &str, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-openai-key"))
        .and(body_partial_json(json!({
            "messages": [{"role": "system", "content": system_prompt}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response(content)))
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Start the service against the mock and return its base URL.
async fn spawn_app(mock_server: &MockServer, echo_original: bool) -> String {
    let config = create_test_config(
        &format!("{}/v1/chat/completions", mock_server.uri()),
        echo_original,
    );
    let orchestrator = build_orchestrator(reqwest::Client::new(), &config);
    let app = server::create_router(server::AppState::new(orchestrator));

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    format!("http://{}", addr)
}

async fn post_translate(base_url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/translate", base_url))
        .json(&body)
        .send()
        .await
        .expect("request");

    let status = response.status().as_u16();
    let body = response.json().await.expect("json body");
    (status, body)
}

// ==================== Success Path ====================

#[tokio::test]
async fn test_translate_de_to_en_and_fr() {
    let mock_server = MockServer::start().await;
    mount_translation(&mock_server, "You are a German to English translator.", "Hello").await;
    mount_translation(&mock_server, "You are a German to French translator.", "Bonjour").await;

    let base_url = spawn_app(&mock_server, false).await;
    let (status, body) = post_translate(
        &base_url,
        json!({"sourceLanguage": "de", "targetLanguages": ["en", "fr"], "text": "Hallo"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"translations": {"en": "Hello", "fr": "Bonjour"}})
    );
}

#[tokio::test]
async fn test_translate_with_echo_includes_source() {
    let mock_server = MockServer::start().await;
    mount_translation(&mock_server, "You are a German to English translator.", "Hello").await;
    mount_translation(&mock_server, "You are a German to French translator.", "Bonjour").await;

    let base_url = spawn_app(&mock_server, true).await;
    let (status, body) = post_translate(
        &base_url,
        json!({"sourceLanguage": "de", "targetLanguages": ["en", "fr"], "text": "Hallo"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"translations": {"de": "Hallo", "en": "Hello", "fr": "Bonjour"}})
    );
}

#[tokio::test]
async fn test_translate_country_locale_key_and_prompt() {
    let mock_server = MockServer::start().await;
    mount_translation(
        &mock_server,
        "You are a German to French (France) translator.",
        "Bonjour",
    )
    .await;

    let base_url = spawn_app(&mock_server, false).await;
    let (status, body) = post_translate(
        &base_url,
        json!({"sourceLanguage": "de", "targetLanguages": ["fr_fr", "FR-FR"], "text": "Hallo"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({"translations": {"fr-FR": "Bonjour"}}));
}

// ==================== Validation ====================

#[tokio::test]
async fn test_invalid_requests_are_rejected_without_completion_calls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("x")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let base_url = spawn_app(&mock_server, false).await;

    let cases = [
        json!({"sourceLanguage": "de", "targetLanguages": [], "text": "Hallo"}),
        json!({"sourceLanguage": "de", "targetLanguages": ["en"], "text": "   "}),
        json!({"sourceLanguage": "", "targetLanguages": ["en"], "text": "Hallo"}),
        json!({"sourceLanguage": "de", "targetLanguages": ["en", " "], "text": "Hallo"}),
        json!({"targetLanguages": ["en"], "text": "Hallo"}),
    ];

    for case in cases {
        let (status, body) = post_translate(&base_url, case.clone()).await;
        assert_eq!(status, 400, "Expected 400 for {}", case);
        assert!(body["error"].is_string(), "Expected error message for {}", case);
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let mock_server = MockServer::start().await;
    let base_url = spawn_app(&mock_server, false).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", base_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("json body");
    assert!(body["error"].is_string());
}

// ==================== Failure Semantics ====================

#[tokio::test]
async fn test_one_failed_language_fails_whole_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "system", "content": "You are a German to French translator."}]
        })))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "system", "content": "You are a German to English translator."}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("Hello")))
        .mount(&mock_server)
        .await;

    let base_url = spawn_app(&mock_server, true).await;
    let (status, body) = post_translate(
        &base_url,
        json!({"sourceLanguage": "de", "targetLanguages": ["en", "fr"], "text": "Hallo"}),
    )
    .await;

    assert_eq!(status, 502);
    assert!(body.get("translations").is_none());
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_empty_completion_fails_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let base_url = spawn_app(&mock_server, false).await;
    let (status, body) = post_translate(
        &base_url,
        json!({"sourceLanguage": "de", "targetLanguages": ["en"], "text": "Hallo"}),
    )
    .await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("no content"));
}

// ==================== Health ====================

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;
    let base_url = spawn_app(&mock_server, false).await;

    let response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({"status": "ok"}));
}
