use axum::http::StatusCode;
use client::UsersClient;
use shared_types::{AppErrorKind, SubmissionConfig};

use crate::common::{self, Reply};

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let endpoint = common::spawn_endpoint(Reply::Fixed(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"boom"}"#.to_string(),
    ))
    .await;

    let err = endpoint
        .client()
        .create_user(&common::ana())
        .await
        .expect_err("500 should fail");

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.status, Some(500));
    assert!(err.message.contains("boom"), "got {}", err.message);
    assert_eq!(endpoint.requests().len(), 1, "no retry");
}

#[tokio::test]
async fn test_client_error_status_is_not_decoded() {
    let endpoint = common::spawn_endpoint(Reply::Fixed(
        StatusCode::UNAUTHORIZED,
        r#"{"error":"Missing API key"}"#.to_string(),
    ))
    .await;

    let err = endpoint
        .client()
        .create_user(&common::ana())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.status, Some(401));
    assert!(err.friendly_message().contains("401"));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let endpoint =
        common::spawn_endpoint(Reply::Fixed(StatusCode::CREATED, "not json".to_string())).await;

    let err = endpoint
        .client()
        .create_user(&common::ana())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn test_success_body_without_id_is_a_decode_error() {
    let endpoint = common::spawn_endpoint(Reply::Fixed(
        StatusCode::CREATED,
        r#"{"name":"Ana"}"#.to_string(),
    ))
    .await;

    let err = endpoint
        .client()
        .create_user(&common::ana())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    let client = UsersClient::new(SubmissionConfig {
        endpoint: common::closed_endpoint_url().await,
        api_key: None,
    });

    let err = client.create_user(&common::ana()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(err.friendly_message().contains("could not reach"));
}
