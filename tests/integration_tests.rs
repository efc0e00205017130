//! Integration tests using mock HTTP server
//!
//! Tests the challenge flow end to end: 401 + WWW-Authenticate → parsed
//! challenge → authenticator headers → retried request.

use http_client_auth::config::load_config_from_str;
use http_client_auth::{Authenticator, BasicAuthenticator, Error, WwwAuthenticate};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a resource that wants Basic credentials for alice:s3cr3t
async fn protected_server(challenge: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artifacts/app.jar"))
        .and(header("Authorization", "Basic YWxpY2U6czNjcjN0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("jar-bytes"))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/artifacts/app.jar"))
        .respond_with(ResponseTemplate::new(401).insert_header("WWW-Authenticate", challenge))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    mock_server
}

// ============================================================================
// Challenge / Retry Flow
// ============================================================================

#[tokio::test]
async fn test_basic_challenge_then_retry() {
    let mock_server = protected_server("Basic realm=\"artifacts\"").await;
    let url = format!("{}/artifacts/app.jar", mock_server.uri());
    let client = reqwest::Client::new();

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.status(), 401);

    let challenge = WwwAuthenticate::from_headers(first.headers()).unwrap();
    assert_eq!(challenge.scheme(), "Basic");
    assert_eq!(challenge.realm(), Some("artifacts"));

    let auth = BasicAuthenticator::new("alice", "s3cr3t");
    let retried = auth
        .apply(client.get(&url), &challenge)
        .unwrap()
        .send()
        .await
        .unwrap();

    assert_eq!(retried.status(), 200);
    assert_eq!(retried.text().await.unwrap(), "jar-bytes");
}

#[tokio::test]
async fn test_wrong_credentials_still_unauthorized() {
    let mock_server = protected_server("Basic realm=\"artifacts\"").await;
    let url = format!("{}/artifacts/app.jar", mock_server.uri());
    let client = reqwest::Client::new();

    let first = client.get(&url).send().await.unwrap();
    let challenge = WwwAuthenticate::from_headers(first.headers()).unwrap();

    let auth = BasicAuthenticator::new("alice", "wrong");
    let retried = auth
        .apply(client.get(&url), &challenge)
        .unwrap()
        .send()
        .await
        .unwrap();

    assert_eq!(retried.status(), 401);
}

#[tokio::test]
async fn test_bearer_challenge_rejected_by_basic() {
    let mock_server = protected_server("Bearer realm=\"https://auth.example.com/token\"").await;
    let url = format!("{}/artifacts/app.jar", mock_server.uri());
    let client = reqwest::Client::new();

    let first = client.get(&url).send().await.unwrap();
    let challenge = WwwAuthenticate::from_headers(first.headers()).unwrap();

    let auth = BasicAuthenticator::new("alice", "s3cr3t");
    let err = auth.apply(client.get(&url), &challenge).unwrap_err();

    match err {
        Error::UnsupportedScheme { scheme, challenge } => {
            assert_eq!(scheme, "Bearer");
            assert_eq!(challenge, "Bearer realm=\"https://auth.example.com/token\"");
        }
        other => panic!("expected UnsupportedScheme, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_without_challenge() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let response = reqwest::get(format!("{}/private", mock_server.uri()))
        .await
        .unwrap();
    let err = WwwAuthenticate::from_headers(response.headers()).unwrap_err();
    assert!(matches!(err, Error::MissingChallenge));
}

// ============================================================================
// Config-Driven Flow
// ============================================================================

#[tokio::test]
async fn test_config_driven_authenticator() {
    let mock_server = protected_server("Basic realm=\"artifacts\"").await;
    let url = format!("{}/artifacts/app.jar", mock_server.uri());
    let client = reqwest::Client::new();

    let config = load_config_from_str(
        r"
auth:
  type: basic
  username: alice
  password: s3cr3t
",
    )
    .unwrap();
    let auth = config.auth.authenticator().unwrap();

    let first = client.get(&url).send().await.unwrap();
    let challenge = WwwAuthenticate::from_headers(first.headers()).unwrap();

    let retried = auth
        .apply(client.get(&url), &challenge)
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(retried.status(), 200);
}

#[tokio::test]
async fn test_anonymous_config_stays_unauthorized() {
    let mock_server = protected_server("Basic realm=\"artifacts\"").await;
    let url = format!("{}/artifacts/app.jar", mock_server.uri());
    let client = reqwest::Client::new();

    let auth = load_config_from_str("{}")
        .unwrap()
        .auth
        .authenticator()
        .unwrap();

    let first = client.get(&url).send().await.unwrap();
    let challenge = WwwAuthenticate::from_headers(first.headers()).unwrap();

    let retried = auth
        .apply(client.get(&url), &challenge)
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(retried.status(), 401);
}
