//! Tests for response classification and transport failures.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use common::{client, mock_error, mock_json, setup_mock_server};
use malkit::{Error, MalClient, RetryPolicy, Route};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn failing_request(status: u16, error: &str, message: &str) -> Error {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/anime/1"))
        .respond_with(mock_error(status, error, message))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).anime().details(1).await.unwrap_err()
}

#[tokio::test]
async fn test_bad_request() {
    let err = failing_request(400, "invalid_parameters", "limit is invalid").await;
    let Error::BadRequest(api) = err else {
        panic!("expected BadRequest");
    };
    assert_eq!(api.status, 400);
    assert_eq!(api.error, "invalid_parameters");
    assert_eq!(api.message, "limit is invalid");
}

#[tokio::test]
async fn test_unauthorized() {
    let err = failing_request(401, "invalid_token", "token is expired").await;
    assert!(matches!(err, Error::Unauthorized(_)));
    assert_eq!(err.api_error().unwrap().message, "token is expired");
}

#[tokio::test]
async fn test_forbidden() {
    let err = failing_request(403, "forbidden", "").await;
    assert!(matches!(err, Error::Forbidden(_)));
}

#[tokio::test]
async fn test_not_found() {
    let err = failing_request(404, "not_found", "").await;
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_other_status() {
    let err = failing_request(500, "internal_error", "boom").await;
    let Error::Api(api) = err else {
        panic!("expected Api");
    };
    assert_eq!(api.status, 500);
    assert_eq!(api.to_string(), "500 internal_error: boom");
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/anime/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>\n"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).anime().details(1).await.unwrap_err();
    let Error::Api(api) = err else {
        panic!("expected Api");
    };
    assert_eq!(api.status, 503);
    assert_eq!(api.error, "Service Unavailable");
    assert_eq!(api.message, "<html>down</html>");
}

#[tokio::test]
async fn test_http_errors_are_not_retried() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/anime/1"))
        .respond_with(mock_error(500, "internal_error", ""))
        .expect(1)
        .mount(&server)
        .await;

    let client = MalClient::builder()
        .client_id("test-client")
        .v2_url(format!("{}/v2", server.uri()))
        .retry_policy(RetryPolicy::default())
        .build()
        .unwrap();

    assert!(client.anime().details(1).await.is_err());
}

#[tokio::test]
async fn test_connection_refused_is_reported_immediately() {
    let client = MalClient::builder()
        .client_id("test-client")
        .v2_url("http://127.0.0.1:1/v2")
        .retry_policy(RetryPolicy::default())
        .build()
        .unwrap();

    let start = std::time::Instant::now();
    let err = client.anime().details(1).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
}

/// Accept connections, read the request, then abort with an RST.
async fn spawn_resetting_server() -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepts = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&accepts);
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            #[allow(deprecated)]
            stream.set_linger(Some(Duration::ZERO)).unwrap();
            drop(stream);
        }
    });

    (format!("http://{addr}/v2"), accepts)
}

#[tokio::test]
async fn test_connection_reset_is_retried_until_exhausted() {
    let (base, accepts) = spawn_resetting_server().await;
    let policy = RetryPolicy {
        max_attempts: 5,
        initial_backoff: Duration::from_millis(5),
        backoff_step: Duration::from_millis(5),
        // ECONNRESET on Linux, BSD/macOS and Windows
        reset_codes: vec![104, 54, 10054],
    };
    let client = MalClient::builder()
        .client_id("test-client")
        .v2_url(base)
        .retry_policy(policy.clone())
        .build()
        .unwrap();

    let err = client.anime().details(1).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(policy.should_retry(&err));
    assert_eq!(accepts.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_connection_reset_not_in_policy_is_not_retried() {
    let (base, accepts) = spawn_resetting_server().await;
    let client = MalClient::builder()
        .client_id("test-client")
        .v2_url(base)
        .retry_policy(RetryPolicy {
            reset_codes: Vec::new(),
            ..RetryPolicy::default()
        })
        .build()
        .unwrap();

    let err = client.anime().details(1).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert_eq!(accepts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/anime/1/my_list_status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server)
        .send(Route::delete("/anime/1/my_list_status"))
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_send_raw_route_with_explicit_bearer() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/anime/5114"))
        .and(header("authorization", "Bearer other-token"))
        .respond_with(mock_json(serde_json::json!({"id": 5114, "mean": 9.1})))
        .expect(1)
        .mount(&server)
        .await;

    let doc = client(&server)
        .send(Route::get("/anime/5114").param("fields", "id,mean").bearer("other-token"))
        .await
        .unwrap();
    assert_eq!(doc["mean"], 9.1);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/anime/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).anime().details(1).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
