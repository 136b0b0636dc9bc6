use crate::common::{account_path, create_http_client};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chatwoot_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio::sync::mpsc;
use tower::util::ServiceExt;

fn state(events: &[&str], include_raw_body: bool) -> (WebhookState, mpsc::Receiver<WebhookEvent>) {
    let (sender, receiver) = mpsc::channel(8);
    let config = WebhookConfig {
        events: events.iter().map(|e| e.to_string()).collect(),
        include_raw_body,
    };
    (WebhookState::new(config, sender).unwrap(), receiver)
}

fn delivery(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_subscribed_event_is_forwarded() {
    let (state, mut receiver) = state(&["message_created"], true);
    let app = webhook_router(state);
    let body = r#"{"event":"message_created","id":42,"content":"hi"}"#;

    let response = app.oneshot(delivery(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let event = receiver.try_recv().unwrap();
    assert_eq!(event.event, "message_created");
    assert_eq!(event.payload["id"], 42);
    assert_eq!(event.raw_body.as_deref(), Some(body));
}

#[tokio::test]
async fn test_unsubscribed_event_is_acknowledged_and_dropped() {
    let (state, mut receiver) = state(&["message_created"], false);
    let app = webhook_router(state);

    let response = app
        .oneshot(delivery(r#"{"event":"contact_updated","id":1}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (state, mut receiver) = state(&["message_created"], false);
    let app = webhook_router(state);

    let response = app.oneshot(delivery("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_dropped_receiver_is_server_error() {
    let (state, receiver) = state(&["message_created"], false);
    drop(receiver);
    let app = webhook_router(state);

    let response = app
        .oneshot(delivery(r#"{"event":"message_created"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_only_post_is_routed() {
    let (state, _receiver) = state(&["message_created"], false);
    let app = webhook_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/webhook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_state_rejects_unknown_events() {
    let (sender, _receiver) = mpsc::channel(1);
    let config = WebhookConfig {
        events: vec!["message_sent".to_string()],
        include_raw_body: false,
    };
    assert!(WebhookState::new(config, sender).is_err());
}

#[tokio::test]
async fn test_webhook_registration_lifecycle() {
    let mut server = Server::new_async().await;
    let url = "https://hooks.example.com/chatwoot";
    let list = server
        .mock("GET", account_path("/webhooks").as_str())
        .with_status(200)
        .with_body(
            json!({"payload": {"webhooks": [
                {"id": 4, "url": "https://other.example.com"},
                {"id": 5, "url": url}
            ]}})
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;
    let create = server
        .mock("POST", account_path("/webhooks").as_str())
        .match_body(Matcher::Json(json!({
            "url": url,
            "subscriptions": ["message_created", "conversation_created"]
        })))
        .with_status(200)
        .with_body(json!({"payload": {"webhook": {"id": 6, "url": url}}}).to_string())
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", account_path("/webhooks/6").as_str())
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let service = WebhookServiceImpl::new(Arc::new(create_http_client(&server.url())));
    assert_eq!(service.check_exists(url).await.unwrap(), Some(5));
    assert_eq!(
        service
            .check_exists("https://missing.example.com")
            .await
            .unwrap(),
        None
    );

    let events = vec![
        "message_created".to_string(),
        "conversation_created".to_string(),
    ];
    assert_eq!(service.create(url, &events).await.unwrap(), 6);
    service.delete(6).await.unwrap();

    list.assert_async().await;
    create.assert_async().await;
    delete.assert_async().await;
}
