// Common utilities for integration tests

use chatwoot_client::prelude::*;
use serde_json::{Value, json};

pub const ACCOUNT_ID: &str = "1";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const PLATFORM_TOKEN: &str = "test-platform-token";
pub const INBOX_IDENTIFIER: &str = "inbox-xyz";

/// Credentials for every scope pointing at a mock server
pub fn test_credentials(base_url: &str) -> Credentials {
    Credentials {
        base_url: base_url.to_string(),
        account_id: Some(ACCOUNT_ID.to_string()),
        api_access_token: Some(ACCESS_TOKEN.to_string()),
        platform_token: Some(PLATFORM_TOKEN.to_string()),
        inbox_identifier: Some(INBOX_IDENTIFIER.to_string()),
    }
}

/// Creates an HTTP executor against a mock server
pub fn create_http_client(base_url: &str) -> HttpClient {
    setup_logger();
    HttpClient::new(Config::with_credentials(test_credentials(base_url)))
        .expect("Failed to build HTTP client")
}

/// Creates a test client against a mock server
pub fn create_test_client(base_url: &str) -> Client {
    setup_logger();
    Client::new(Config::with_credentials(test_credentials(base_url)))
        .expect("Failed to build client")
}

/// Account-scoped path of an endpoint
pub fn account_path(endpoint: &str) -> String {
    format!("/api/v1/accounts/{ACCOUNT_ID}{endpoint}")
}

/// `count` records with sequential ids starting at `first_id`
pub fn records(first_id: u64, count: u64) -> Vec<Value> {
    (0..count).map(|i| json!({"id": first_id + i})).collect()
}

/// `count` messages with ids descending from `newest_id`
pub fn messages(newest_id: u64, count: u64) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"id": newest_id - i, "content": format!("message {}", newest_id - i)}))
        .collect()
}
