#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANSWER: &str = "**Learning Goals**\n* I can add fractions with unlike denominators.";

fn learngoal(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("learngoal").unwrap();
    cmd.current_dir(dir)
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("LEARNGOAL_API_URL");
    cmd
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-sonnet-20241022",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 812, "output_tokens": 240}
    }))
}

#[test]
fn missing_api_key_is_config_error() {
    let dir = tempdir().unwrap();
    learngoal(dir.path())
        .args(["generate", "-t", "targets"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API key not found"))
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"));
}

#[test]
fn api_key_is_read_from_dotenv_file() {
    let dir = tempdir().unwrap();
    // Key comes from .env; the unreachable URL proves config loaded.
    std::fs::write(
        dir.path().join(".env"),
        "ANTHROPIC_API_KEY=sk-from-dotenv\nLEARNGOAL_API_URL=http://127.0.0.1:1\n",
    )
    .unwrap();

    learngoal(dir.path())
        .args(["generate", "-t", "targets"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_input_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_response(ANSWER))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    learngoal(dir.path())
        .env("ANTHROPIC_API_KEY", "sk-test")
        .env("LEARNGOAL_API_URL", server.uri())
        .args(["generate", "-t", "   \n  "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Please enter learning targets to process.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_prints_model_text_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(text_response(ANSWER))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    learngoal(dir.path())
        .env("ANTHROPIC_API_KEY", "sk-test")
        .env("LEARNGOAL_API_URL", server.uri())
        .args(["generate", "-t", "I can add fractions."])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{ANSWER}\n")));
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_writes_output_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(text_response(ANSWER))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let out = dir.path().join("goals.md");
    learngoal(dir.path())
        .env("ANTHROPIC_API_KEY", "sk-test")
        .env("LEARNGOAL_API_URL", server.uri())
        .args(["generate", "-t", "I can add fractions.", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output Generated Successfully!"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), ANSWER);
}

#[tokio::test(flavor = "multi_thread")]
async fn api_failure_exits_with_generation_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "type": "error",
            "error": {"type": "api_error", "message": "Internal server error"}
        })))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    learngoal(dir.path())
        .env("ANTHROPIC_API_KEY", "sk-test")
        .env("LEARNGOAL_API_URL", server.uri())
        .args(["generate", "-t", "I can add fractions."])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "An error occurred: API error (status 500): api_error: Internal server error",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_key_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        })))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    learngoal(dir.path())
        .env("ANTHROPIC_API_KEY", "sk-wrong")
        .env("LEARNGOAL_API_URL", server.uri())
        .args(["generate", "-t", "targets"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unauthorized"));
}
