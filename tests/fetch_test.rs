//! Integration tests for the remote fetcher against a wiremock server.
//!
//! Covers:
//! - Successful authenticated fetch (status 200)
//! - Credential mismatch and missing resource (non-200 statuses)
//! - Basic-auth header shape (token as username, empty password)
//! - Non-200 2xx responses treated as failures
//! - Transport-level failures

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kubectx_git::core::fetcher::Fetcher;
use kubectx_git::error::KubectxError;

const KUBECONFIG_BODY: &str = "apiVersion: v1\nkind: Config\ncurrent-context: kind-kind\n";

// base64("secret:")
const SECRET_BASIC_AUTH: &str = "Basic c2VjcmV0Og==";

/// Serve `/config.yaml` for the token "secret"; everything else is a 404,
/// including requests with mismatched credentials.
async fn mock_config_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config.yaml"))
        .and(header("authorization", SECRET_BASIC_AUTH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain; charset=utf-8")
                .set_body_string(KUBECONFIG_BODY),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn fetcher(access_token: &str) -> Fetcher {
    Fetcher::new(access_token).expect("fetcher construction")
}

#[tokio::test]
async fn fetch_succeeds_with_valid_token() {
    let server = mock_config_server().await;
    let url = format!("{}/config.yaml", server.uri());

    fetcher("secret").fetch(&url).await.expect("fetch should succeed");
}

#[tokio::test]
async fn fetch_fails_with_invalid_token() {
    let server = mock_config_server().await;
    let url = format!("{}/config.yaml", server.uri());

    let err = fetcher("invalid").fetch(&url).await.unwrap_err();
    assert!(matches!(
        err,
        KubectxError::RemoteStatus { status: 404, .. }
    ));
    let message = err.to_string();
    assert!(message.contains(&url));
    assert!(message.contains("404"));
}

#[tokio::test]
async fn fetch_fails_for_missing_path() {
    let server = mock_config_server().await;
    let url = format!("{}/not-exists.yaml", server.uri());

    let err = fetcher("secret").fetch(&url).await.unwrap_err();
    assert!(matches!(err, KubectxError::RemoteStatus { .. }));
}

#[tokio::test]
async fn basic_auth_uses_token_as_username_with_empty_password() {
    let server = MockServer::start().await;

    // base64("invalid:")
    Mock::given(method("GET"))
        .and(path("/config.yaml"))
        .and(header("authorization", "Basic aW52YWxpZDo="))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = format!("{}/config.yaml", server.uri());
    fetcher("invalid").fetch(&url).await.expect("header should match");
}

#[tokio::test]
async fn non_200_success_status_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accepted.yaml"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let url = format!("{}/accepted.yaml", server.uri());
    let err = fetcher("secret").fetch(&url).await.unwrap_err();
    assert!(matches!(
        err,
        KubectxError::RemoteStatus { status: 202, .. }
    ));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Port 1 is essentially never listening.
    let err = fetcher("secret")
        .fetch("http://127.0.0.1:1/config.yaml")
        .await
        .unwrap_err();
    assert!(matches!(err, KubectxError::Transport(_)));
}
