use chatwoot_client::application::config::{Config, Credentials};
use chatwoot_client::error::AppError;
use chatwoot_client::model::http::{
    ChatwootApi, HttpClient, normalize_base_url, prepare_body, status_message,
};
use chatwoot_client::model::requests::ApiScope;
use reqwest::Method;
use serde_json::json;
use tokio_test::block_on;

#[test]
fn test_normalize_base_url_is_idempotent() {
    for raw in [
        "https://chat.example.com",
        "https://chat.example.com/",
        "http://localhost:3000////",
        "  https://chat.example.com/app/ ",
    ] {
        let once = normalize_base_url(raw).unwrap();
        assert_eq!(normalize_base_url(&once).unwrap(), once);
        assert!(!once.ends_with('/'));
    }
}

#[test]
fn test_normalize_base_url_keeps_path() {
    assert_eq!(
        normalize_base_url("https://example.com/chatwoot/").unwrap(),
        "https://example.com/chatwoot"
    );
}

#[test]
fn test_normalize_base_url_rejects_other_schemes() {
    for raw in ["ftp://x", "x.com", "", "   ", "/", "HTTPS//x"] {
        let err = normalize_base_url(raw).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)), "{raw} accepted");
    }
}

#[test]
fn test_status_message_table() {
    for code in [400, 401, 403, 404, 422, 429, 500, 502, 503] {
        assert!(status_message(code).is_some(), "{code} missing");
    }
    assert!(status_message(404).unwrap().contains("Not Found"));
    assert!(status_message(418).is_none());
    assert!(status_message(504).is_none());
}

#[test]
fn test_prepare_body_keeps_non_empty_objects() {
    let body = json!({"content": "hello"});
    assert_eq!(prepare_body(&Method::PATCH, Some(&body)), Some(&body));
    assert_eq!(prepare_body(&Method::PUT, Some(&body)), Some(&body));
    assert_eq!(prepare_body(&Method::POST, None), None);
    assert_eq!(prepare_body(&Method::POST, Some(&json!(null))), None);
}

#[test]
fn test_public_credentials_cannot_call_account_scope() {
    let config = Config::with_credentials(Credentials::public("https://chat.example.com", "inbox"));
    let client = HttpClient::new(config).unwrap();

    let err = block_on(client.request(Method::GET, "/contacts", None, None)).unwrap_err();
    assert!(err.to_string().contains("missing account id"));

    let url = client.url_for(ApiScope::Public, "/contacts").unwrap();
    assert_eq!(url, "https://chat.example.com/public/api/v1/inboxes/inbox/contacts");
}

#[test]
fn test_timeout_is_optional() {
    let mut config = Config::with_credentials(Credentials::account("https://x.io", "1", "t"));
    assert!(HttpClient::new(config.clone()).is_ok());
    config.rest_api.timeout_secs = Some(5);
    let client = HttpClient::new(config).unwrap();
    assert_eq!(client.config().rest_api.timeout_secs, Some(5));
}
