//! Common test utilities for MyAnimeList client tests.

use malkit::{MalClient, RetryPolicy};
use serde::Serialize;
use wiremock::{MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "test-token";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server, with no access token bound.
pub fn anonymous_client(server: &MockServer) -> MalClient {
    MalClient::builder()
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .v1_url(format!("{}/v1", server.uri()))
        .v2_url(format!("{}/v2", server.uri()))
        .retry_policy(RetryPolicy::none())
        .build()
        .unwrap()
}

/// A client pointed at the mock server and bound to [`ACCESS_TOKEN`].
pub fn client(server: &MockServer) -> MalClient {
    anonymous_client(server).with_access_token(ACCESS_TOKEN)
}

/// Create a successful JSON response.
pub fn mock_json<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create an error response in the API's error format.
#[allow(dead_code)] // Not all test files use this
pub fn mock_error(status: u16, error: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": error,
        "message": message
    }))
}

/// A minimal anime node.
#[allow(dead_code)]
pub fn anime_node(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "main_picture": {
            "medium": format!("https://cdn.myanimelist.net/images/anime/{id}.jpg"),
            "large": format!("https://cdn.myanimelist.net/images/anime/{id}l.jpg")
        }
    })
}

/// The value of `name` in the query string of the single request the
/// server received.
#[allow(dead_code)]
pub async fn received_query_param(server: &MockServer, name: &str) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
