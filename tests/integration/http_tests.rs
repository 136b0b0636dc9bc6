use crate::common::{
    ACCESS_TOKEN, INBOX_IDENTIFIER, PLATFORM_TOKEN, account_path, create_http_client,
    test_credentials,
};
use assert_json_diff::assert_json_eq;
use chatwoot_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::{Map, json};

#[tokio::test]
async fn test_account_request_sends_token_and_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("/contacts/5").as_str())
        .match_header("api_access_token", ACCESS_TOKEN)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"payload": {"id": 5, "name": "Jane"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let response = client
        .request(Method::GET, "/contacts/5", None, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_json_eq!(response, json!({"payload": {"id": 5, "name": "Jane"}}));
}

#[tokio::test]
async fn test_trailing_slashes_in_base_url_are_ignored() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("").as_str())
        .with_status(200)
        .with_body(r#"{"id": 1, "name": "Acme"}"#)
        .create_async()
        .await;

    let client = create_http_client(&format!("  {}///", server.url()));
    let response = client.request(Method::GET, "", None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["name"], "Acme");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", account_path("/labels").as_str())
        .match_body(Matcher::Json(json!({"title": "vip", "color": "#ff0000"})))
        .with_status(200)
        .with_body(r#"{"id": 3, "title": "vip"}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let body = json!({"title": "vip", "color": "#ff0000"});
    let response = client
        .request(Method::POST, "/labels", Some(&body), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["id"], 3);
}

#[tokio::test]
async fn test_body_is_omitted_for_get_delete_and_empty_objects() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", account_path("/labels").as_str())
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"{"payload": []}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", account_path("/labels/3").as_str())
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;
    let post = server
        .mock("POST", account_path("/conversations/4/toggle_status").as_str())
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"{"payload": {"success": true}}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let body = json!({"ignored": true});
    let empty = json!({});
    client
        .request(Method::GET, "/labels", Some(&body), None)
        .await
        .unwrap();
    let deleted = client
        .request(Method::DELETE, "/labels/3", Some(&body), None)
        .await
        .unwrap();
    client
        .request(Method::POST, "/conversations/4/toggle_status", Some(&empty), None)
        .await
        .unwrap();

    get.assert_async().await;
    delete.assert_async().await;
    post.assert_async().await;
    // Empty success bodies are reported as a success flag
    assert_json_eq!(deleted, json!({"success": true}));
}

#[tokio::test]
async fn test_query_parameters_are_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("/conversations").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "open".into()),
            Matcher::UrlEncoded("labels[]".into(), "vip".into()),
            Matcher::UrlEncoded("labels[]".into(), "billing".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": {"meta": {}, "payload": []}}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let mut query = Map::new();
    query.insert("status".to_string(), json!("open"));
    query.insert("labels".to_string(), json!(["vip", "billing"]));
    query.insert("skipped".to_string(), json!(null));
    client
        .request(Method::GET, "/conversations", None, Some(&query))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_known_status_is_mapped() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", account_path("/contacts/99").as_str())
        .with_status(404)
        .with_body(r#"{"error": "Resource could not be found"}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let err = client
        .request(Method::GET, "/contacts/99", None, None)
        .await
        .unwrap_err();

    match err {
        AppError::Api(api) => {
            assert_eq!(api.status, 404);
            assert!(api.message.contains("Not Found"));
            assert_eq!(api.description, "Failed to GET /contacts/99");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_status_keeps_transport_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", account_path("/teams").as_str())
        .with_status(418)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let body = json!({"name": "Tea"});
    let err = client
        .request(Method::POST, "/teams", Some(&body), None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(418));
    match err {
        AppError::Api(api) => {
            assert!(api.message.contains("418"), "{}", api.message);
            assert!(!api.message.contains("Not Found"));
            assert_eq!(api.description, "Failed to POST /teams");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_platform_scope_uses_platform_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/platform/api/v1/users/3")
        .match_header("api_access_token", PLATFORM_TOKEN)
        .with_status(200)
        .with_body(r#"{"id": 3}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    client
        .request_scoped(ApiScope::Platform, Method::GET, "/users/3", None, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_public_scope_sends_no_token() {
    let mut server = Server::new_async().await;
    let path = format!("/public/api/v1/inboxes/{INBOX_IDENTIFIER}/contacts");
    let mock = server
        .mock("POST", path.as_str())
        .match_header("api_access_token", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"source_id": "src-1", "pubsub_token": "x"}"#)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let body = json!({"name": "Visitor"});
    let response = client
        .request_scoped(ApiScope::Public, Method::POST, "/contacts", Some(&body), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["source_id"], "src-1");
}

#[tokio::test]
async fn test_missing_credentials_fail_before_sending() {
    let mut credentials = test_credentials("https://chat.example.com");
    credentials.platform_token = None;
    let client = HttpClient::new(Config::with_credentials(credentials)).unwrap();

    let err = client
        .request_scoped(ApiScope::Platform, Method::GET, "/accounts/1", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[tokio::test]
async fn test_invalid_base_url_is_configuration_error() {
    let client = create_http_client("chat.example.com");
    let err = client
        .request(Method::GET, "/contacts", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1
    let client = create_http_client("http://127.0.0.1:1");
    let err = client
        .request(Method::GET, "/contacts", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.status(), None);
}
