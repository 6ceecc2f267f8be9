//! Integration tests for the GitHub client against a mock API server.

use base64::Engine;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scm::GitHubClient;

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url("test-token", &server.uri()).unwrap()
}

/// Wrap content the way the contents API does: base64 with newlines.
fn github_base64(content: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(content);
    encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn fetches_and_parses_rule_file() {
    let server = MockServer::start().await;

    let yaml = "needs-docs:\n  title: \"docs\"\nwip:\n  title: \"^WIP\"\n";
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/.github/labeler.yml"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": github_base64(yaml),
            "encoding": "base64",
            "path": ".github/labeler.yml"
        })))
        .mount(&server)
        .await;

    let rules = client(&server)
        .fetch_rule_file("acme", "widgets")
        .await
        .unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules["needs-docs"].title.as_deref(), Some("docs"));
    assert_eq!(rules["wip"].title.as_deref(), Some("^WIP"));
}

#[tokio::test]
async fn honors_custom_config_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/ci/labels.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": github_base64("stale:\n  title: \"old\"\n")
        })))
        .mount(&server)
        .await;

    let rules = client(&server)
        .with_config_path("ci/labels.yml")
        .fetch_rule_file("acme", "widgets")
        .await
        .unwrap();

    assert_eq!(rules["stale"].title.as_deref(), Some("old"));
}

#[tokio::test]
async fn missing_rule_file_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/.github/labeler.yml"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_rule_file("acme", "widgets")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404"), "unexpected error: {err}");
}

#[tokio::test]
async fn lists_current_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/issues/42/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "bug", "color": "d73a4a"},
            {"name": "needs-docs", "color": "ededed"}
        ])))
        .mount(&server)
        .await;

    let labels = client(&server)
        .list_labels("acme", "widgets", 42)
        .await
        .unwrap();

    assert_eq!(labels, vec!["bug".to_string(), "needs-docs".to_string()]);
}

#[tokio::test]
async fn replaces_labels_with_single_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/widgets/issues/42/labels"))
        .and(body_json(json!({"labels": ["bug", "needs-docs"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "bug"},
            {"name": "needs-docs"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .put_labels(
            "acme",
            "widgets",
            42,
            &["bug".to_string(), "needs-docs".to_string()],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn replace_failure_carries_api_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/widgets/issues/42/labels"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .put_labels("acme", "widgets", 42, &["bad".to_string()])
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("422"), "unexpected error: {message}");
    assert!(
        message.contains("Validation Failed"),
        "unexpected error: {message}"
    );
}
