use pretty_assertions::assert_eq;
use shared_types::UserId;

use crate::common::{self, Reply};

#[tokio::test]
async fn test_create_user_posts_exact_body_once() {
    let endpoint = common::spawn_endpoint(Reply::Created { first_id: 1 }).await;

    let user = endpoint
        .client()
        .create_user(&common::ana())
        .await
        .expect("create_user should succeed");

    let requests = endpoint.requests();
    assert_eq!(requests.len(), 1, "exactly one outbound call");
    assert_eq!(
        requests[0].body,
        serde_json::json!({
            "name": "Ana",
            "email": "a@b.com",
            "password": "pw123",
            "terms": true
        })
    );

    assert_eq!(user.id, UserId::Number(1));
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "a@b.com");
    assert!(user.terms);
    assert_eq!(user.created_at.as_deref(), Some("2026-10-14T12:00:00.000Z"));
}

#[tokio::test]
async fn test_create_user_sends_api_key_when_configured() {
    let endpoint = common::spawn_endpoint(Reply::Created { first_id: 1 }).await;

    endpoint
        .client_with_key("reqres-free-v1")
        .create_user(&common::ana())
        .await
        .unwrap();
    endpoint.client().create_user(&common::ana()).await.unwrap();

    let keys: Vec<Option<String>> = endpoint.requests().into_iter().map(|r| r.api_key).collect();
    assert_eq!(keys, vec![Some("reqres-free-v1".to_string()), None]);
}

#[tokio::test]
async fn test_create_user_accepts_string_id() {
    let body = r#"{"name":"Ana","email":"a@b.com","password":"pw123","terms":true,"id":"483","createdAt":"2026-10-14T12:00:00.000Z"}"#;
    let endpoint = common::spawn_endpoint(Reply::Fixed(
        axum::http::StatusCode::CREATED,
        body.to_string(),
    ))
    .await;

    let user = endpoint.client().create_user(&common::ana()).await.unwrap();
    assert_eq!(user.id, UserId::Text("483".to_string()));
    assert_eq!(user.id.to_string(), "483");
}

#[tokio::test]
async fn test_create_user_accepts_plain_200() {
    let endpoint = common::spawn_endpoint(Reply::Fixed(
        axum::http::StatusCode::OK,
        r#"{"id":1,"name":"Ana","email":"a@b.com","terms":true}"#.to_string(),
    ))
    .await;

    let user = endpoint.client().create_user(&common::ana()).await.unwrap();
    assert_eq!(user.id, UserId::Number(1));
}
