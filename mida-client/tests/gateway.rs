// mida-client/tests/gateway.rs
// API gateway behavior: auth header, timeout, bounded retry, 401 handling.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mida_client::{ClientConfig, ClientError, MemorySession, MidaClient, RetryPolicy};

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        attempts: 2,
        timeout_by_attempt: vec![Duration::from_millis(500), Duration::from_millis(500)],
        backoff: Duration::from_millis(200),
    }
}

fn client_with_token(server: &MockServer, policy: RetryPolicy) -> MidaClient {
    let config = ClientConfig::new(server.uri()).with_retry(policy);
    MidaClient::new(config, Arc::new(MemorySession::with_token("test-token")))
}

fn analytics_body() -> serde_json::Value {
    json!({ "totalOrders": 10, "paidOrders": 7, "revenue": 420.5 })
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .and(wiremock::matchers::header(
            "Authorization",
            "Bearer test-token",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(analytics_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let analytics = client.analytics().await.unwrap();
    assert_eq!(analytics.total_orders, 10);
    assert_eq!(analytics.paid_orders, 7);
}

#[tokio::test]
async fn test_retries_once_after_failed_attempt() {
    let server = MockServer::start().await;
    // First attempt gets a 500, the retry succeeds.
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analytics_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let started = Instant::now();
    let analytics = client.analytics().await.unwrap();

    assert_eq!(analytics.total_orders, 10);
    // The retry must wait the configured backoff first.
    assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_retry_is_bounded_and_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Codice non valido" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let err = client.analytics().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Codice non valido");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let err = client.analytics().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_does_not_retry_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(analytics_body())
                .set_delay(Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let policy = RetryPolicy {
        attempts: 2,
        timeout_by_attempt: vec![Duration::from_millis(100)],
        backoff: Duration::from_millis(50),
    };
    let client = client_with_token(&server, policy);
    let err = client.analytics().await.unwrap_err();

    assert!(matches!(err, ClientError::Timeout));
}

#[tokio::test]
async fn test_401_clears_session_and_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    assert!(client.is_authenticated());

    let err = client.analytics().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired));
    assert!(!client.is_authenticated());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_calls_after_401_go_out_without_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analytics_body()))
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let _ = client.analytics().await.unwrap_err();
    let _ = client.analytics().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.contains_key("authorization"));
    assert!(!requests[1].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = client_with_token(&server, fast_policy());
    let err = client.analytics().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
