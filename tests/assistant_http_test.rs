use httpmock::prelude::*;
use nutriplan::adapters::gemini::GeminiClient;
use nutriplan::core::assistant::Assistant;
use nutriplan::{NutriError, NutriPlan, TomlConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn assistant_for(server: &MockServer) -> Assistant {
    let client = GeminiClient::new(&server.base_url(), "gemini-1.5-flash", "test-key", None).unwrap();
    Assistant::new(Arc::new(client))
}

#[tokio::test]
async fn test_ask_returns_response_text() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(GENERATE_PATH)
            .query_param("key", "test-key")
            .json_body(serde_json::json!({
                "contents": [{"parts": [{"text": "Is oatmeal a good breakfast?"}]}]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{"text": "Yes, oatmeal "}, {"text": "is rich in fiber."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }));
    });

    let reply = assistant_for(&server)
        .ask("Is oatmeal a good breakfast?")
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(reply, "Yes, oatmeal is rich in fiber.");
}

#[tokio::test]
async fn test_empty_prompt_never_reaches_backend() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).json_body(serde_json::json!({"candidates": []}));
    });

    let result = assistant_for(&server).ask("").await;

    assert!(matches!(result, Err(NutriError::ValidationError { .. })));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_backend_error_status_becomes_error_string() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(429)
            .json_body(serde_json::json!({"error": {"message": "Resource has been exhausted"}}));
    });

    let reply = assistant_for(&server).ask("How much protein?").await.unwrap();

    api_mock.assert();
    assert!(reply.starts_with("Error: "));
    assert!(reply.contains("429"));
    assert!(reply.contains("Resource has been exhausted"));
}

#[tokio::test]
async fn test_malformed_body_becomes_error_string() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).body("not json");
    });

    let reply = assistant_for(&server).ask("How much fat?").await.unwrap();
    assert!(reply.starts_with("Error: "));
}

#[tokio::test]
async fn test_empty_candidates_becomes_error_string() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).json_body(serde_json::json!({"candidates": []}));
    });

    let reply = assistant_for(&server).ask("How much fat?").await.unwrap();
    assert!(reply.starts_with("Error: "));
    assert!(reply.contains("no candidates"));
}

#[tokio::test]
async fn test_unreachable_backend_becomes_error_string() {
    // nothing listens on port 9 locally
    let client = GeminiClient::new(
        "http://127.0.0.1:9",
        "gemini-1.5-flash",
        "test-key",
        Some(Duration::from_secs(2)),
    )
    .unwrap();
    let assistant = Assistant::new(Arc::new(client));

    let reply = assistant.ask("Any tips?").await.unwrap();
    assert!(reply.starts_with("Error: "));
}

#[tokio::test]
async fn test_ask_through_loaded_app() {
    let temp_dir = TempDir::new().unwrap();
    let model_path = temp_dir.path().join("model.json");
    let dataset_path = temp_dir.path().join("foods.csv");
    std::fs::write(
        &model_path,
        r#"{"kind": "logistic", "weights": [0.0, 0.0, 1.0], "bias": -10.0}"#,
    )
    .unwrap();
    std::fs::write(
        &dataset_path,
        "Food Item,Calories,Protein,Carbs,Fat\nBanana,105,1.3,27,0.3\n",
    )
    .unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-test:generateContent")
            .query_param("key", "from-config");
        then.status(200).json_body(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "Bananas are a good source of potassium."}]}}]
        }));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[data]
model_path = "{}"
dataset_path = "{}"

[assistant]
base_url = "{}"
model = "gemini-test"
api_key = "from-config"
"#,
        model_path.to_str().unwrap().replace('\\', "/"),
        dataset_path.to_str().unwrap().replace('\\', "/"),
        server.base_url()
    ))
    .unwrap();

    let app = NutriPlan::load(&config).unwrap();
    let reply = app.ask("Are bananas healthy?").await.unwrap();

    api_mock.assert();
    assert_eq!(reply, "Bananas are a good source of potassium.");
}
