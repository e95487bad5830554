// HTTP-level tests for the provider clients and URL spec loading, against wiremock servers.

use serde_json::json;
use swagger_ai_testgen::config::{Config, ProviderSettings};
use swagger_ai_testgen::parser::{load_spec, LoadError, SpecLocation};
use swagger_ai_testgen::providers::{AnthropicProvider, OpenAiProvider, ProviderError, TextProvider};
use swagger_ai_testgen::{generate_tests_from_spec, ProviderKind};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer, model: &str) -> ProviderSettings {
    ProviderSettings {
        api_key: Some("test-key".into()),
        base_url: server.uri(),
        model: model.into(),
    }
}

#[tokio::test]
async fn anthropic_returns_first_text_block() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-test",
            "max_tokens": 2000,
            "messages": [{ "role": "user", "content": "draft please" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": "it('works', () => {});" }],
            "usage": { "input_tokens": 10, "output_tokens": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new("test-key", &settings(&server, "claude-test"));
    let text = provider.complete("draft please").await.unwrap();

    assert_eq!(text, "it('works', () => {});");
}

#[tokio::test]
async fn anthropic_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new("test-key", &settings(&server, "claude-test"));
    let err = provider.complete("draft please").await.unwrap_err();

    match err {
        ProviderError::ApiError { provider, status, body } => {
            assert_eq!(provider, "anthropic");
            assert_eq!(status, 401);
            assert_eq!(body, "invalid x-api-key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn anthropic_without_text_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new("test-key", &settings(&server, "claude-test"));
    let err = provider.complete("draft please").await.unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse("anthropic")));
}

#[tokio::test]
async fn openai_returns_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-test",
            "temperature": 0.7,
            "max_tokens": 2000,
            "messages": [{ "role": "user", "content": "draft please" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "it('lists', () => {});" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("test-key", &settings(&server, "gpt-test"));
    let text = provider.complete("draft please").await.unwrap();

    assert_eq!(text, "it('lists', () => {});");
}

#[tokio::test]
async fn openai_null_content_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("test-key", &settings(&server, "gpt-test"));
    let err = provider.complete("draft please").await.unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse("openai")));
}

#[tokio::test]
async fn spec_is_fetched_from_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi.yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "openapi: 3.0.0\ninfo:\n  title: Tiny\n  version: '1'\npaths:\n  /ping:\n    get:\n      summary: Ping\n",
        ))
        .mount(&server)
        .await;

    let location = SpecLocation::parse(&format!("{}/openapi.yaml", server.uri()));
    let spec = load_spec(&location).await.unwrap();

    assert_eq!(spec.operations.len(), 1);
    assert_eq!(spec.operations[0].method, "GET");
    assert_eq!(spec.operations[0].summary.as_deref(), Some("Ping"));
}

#[tokio::test]
async fn spec_url_error_status_is_a_load_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let location = SpecLocation::parse(&format!("{}/swagger.json", server.uri()));
    let err = load_spec(&location).await.unwrap_err();

    assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn full_run_against_mocked_openai() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/swagger.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "swagger": "2.0",
            "paths": {
                "/users/{id}": {
                    "get": { "summary": "Get user by ID" },
                    "delete": { "summary": "Delete user" }
                }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "it('responds', () => {});" } }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let mut config = Config::from_lookup(|_| None);
    config.swagger_url = format!("{}/swagger.json", server.uri());
    config.output_dir = Some(output.path().to_path_buf());
    config.preferred_provider = ProviderKind::OpenAi;
    config.openai = settings(&server, "gpt-test");

    let written = generate_tests_from_spec(&config).await.unwrap();

    assert_eq!(written.len(), 2);
    let content = std::fs::read_to_string(output.path().join("users-id-delete.cy.js")).unwrap();
    assert_eq!(
        content,
        "describe('DELETE /users/{id}', () => {\n    it('responds', () => {});\n});"
    );
}
