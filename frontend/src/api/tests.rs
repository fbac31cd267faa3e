#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn verify_token_sends_token_and_id_as_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/verify-token")
                .query_param("token", "T")
                .query_param("id", "I");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let response = client(&server).verify_token("T", "I").await.unwrap();
    assert!(response.success);
    assert!(response.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn verify_token_returns_unsuccessful_payload_as_ok() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/verify-token");
            then.status(200)
                .json_body(json!({ "success": false, "error": "expired" }));
        })
        .await;

    let response = client(&server).verify_token("T", "I").await.unwrap();
    assert_eq!(response, ResetResponse::rejected("expired"));
}

#[tokio::test]
async fn verify_token_reads_error_payload_from_failure_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/verify-token");
            then.status(401)
                .json_body(json!({ "success": false, "error": "invalid token" }));
        })
        .await;

    let err = client(&server)
        .verify_token("bad", "I")
        .await
        .expect_err("failure status should be an error");
    assert_eq!(err.code, ApiError::REJECTED);
    assert_eq!(err.server_message(), Some("invalid token"));
}

#[tokio::test]
async fn failure_status_without_payload_is_request_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/verify-token");
            then.status(502).body("bad gateway");
        })
        .await;

    let err = client(&server).verify_token("T", "I").await.unwrap_err();
    assert_eq!(err.code, ApiError::REQUEST_FAILED);
    assert!(err.server_message().is_none());
    assert!(err.error.contains("502"));
}

#[tokio::test]
async fn unreachable_host_is_request_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = client.verify_token("T", "I").await.unwrap_err();
    assert_eq!(err.code, ApiError::REQUEST_FAILED);
}

#[tokio::test]
async fn reset_password_posts_password_and_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/reset-password")
                .query_param("token", "T")
                .query_param("id", "I")
                .json_body(json!({ "password": "abc12345", "id": "I" }));
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let response = client(&server)
        .reset_password("T", "I", "abc12345")
        .await
        .unwrap();
    assert!(response.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn reset_password_surfaces_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/reset-password");
            then.status(400).json_body(json!({
                "success": false,
                "error": "new password must be different"
            }));
        })
        .await;

    let err = client(&server)
        .reset_password("T", "I", "abc12345")
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("new password must be different"));
}

#[tokio::test]
async fn query_values_are_percent_encoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/verify-token")
                .query_param("token", "a+b/c=")
                .query_param("id", "42");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    client(&server).verify_token("a+b/c=", "42").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/verify-token");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    ApiClient::new_with_base_url(server.url("/api/"))
        .verify_token("T", "I")
        .await
        .unwrap();
    mock.assert_async().await;
}
