use crate::common::{account_path, create_http_client, create_test_client, messages, records};
use chatwoot_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn page_body(items: Vec<Value>, current_page: u32, total_pages: u32) -> String {
    json!({
        "meta": {"current_page": current_page, "total_pages": total_pages},
        "payload": items
    })
    .to_string()
}

#[tokio::test]
async fn test_page_driver_follows_meta() {
    let mut server = Server::new_async().await;
    let path = account_path("/contacts");
    let mut mocks = Vec::new();
    for (page, first_id, count) in [(1u32, 1u64, 25u64), (2, 26, 25), (3, 51, 10)] {
        mocks.push(
            server
                .mock("GET", path.as_str())
                .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
                .with_status(200)
                .with_body(page_body(records(first_id, count), page, 3))
                .expect(1)
                .create_async()
                .await,
        );
    }

    let client = create_test_client(&server.url());
    let items = client
        .execute("contact", "getAll", &json!({"returnAll": true}))
        .await
        .unwrap();

    for mock in &mocks {
        mock.assert_async().await;
    }
    assert_eq!(items.len(), 60);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[59]["id"], 60);
}

#[tokio::test]
async fn test_page_driver_safety_ceiling() {
    let mut server = Server::new_async().await;
    let body = json!({"payload": records(1, 25)}).to_string();
    let mock = server
        .mock("GET", account_path("/contacts/search").as_str())
        .match_query(Matcher::UrlEncoded("q".into(), "jane".into()))
        .with_status(200)
        .with_body(body)
        .expect(100)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let items = client
        .execute("contact", "search", &json!({"query": "jane"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2500);
}

#[tokio::test]
async fn test_page_driver_limit_truncates() {
    let mut server = Server::new_async().await;
    let path = account_path("/contacts");
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(page_body(records(1, 25), 1, 2))
        .create_async()
        .await;
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(page_body(records(26, 5), 2, 2))
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let items = client
        .execute("contact", "getAll", &json!({"limit": 27}))
        .await
        .unwrap();
    assert_eq!(items.len(), 27);
}

#[tokio::test]
async fn test_page_driver_error_discards_partial_results() {
    let mut server = Server::new_async().await;
    let path = account_path("/contacts");
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(json!({"payload": records(1, 25)}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .execute("contact", "getAll", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_single_page_when_not_returning_all() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("/contacts").as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
        .with_status(200)
        .with_body(page_body(records(51, 25), 3, 9))
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let items = client
        .execute(
            "contact",
            "getAll",
            &json!({"returnAll": false, "page": 3, "limit": 10}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], 51);
}

#[tokio::test]
async fn test_cursor_driver_follows_before() {
    let mut server = Server::new_async().await;
    let path = account_path("/conversations/9/messages");
    let first = server
        .mock("GET", path.as_str())
        .match_query(Matcher::Regex("^$".into()))
        .with_status(200)
        .with_body(json!({"meta": {}, "payload": messages(100, 20)}).to_string())
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("before".into(), "81".into()))
        .with_status(200)
        .with_body(json!({"payload": messages(80, 20)}).to_string())
        .expect(1)
        .create_async()
        .await;
    let third = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("before".into(), "61".into()))
        .with_status(200)
        .with_body(json!({"payload": messages(60, 5)}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let all = request_all_messages(&client, 9, None).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
    assert_eq!(all.len(), 45);
    assert_eq!(all[0]["id"], 100);
    assert_eq!(all[44]["id"], 56);
}

#[tokio::test]
async fn test_cursor_driver_limit_stops_early() {
    let mut server = Server::new_async().await;
    let path = account_path("/conversations/9/messages");
    let first = server
        .mock("GET", path.as_str())
        .match_query(Matcher::Regex("^$".into()))
        .with_status(200)
        .with_body(json!({"payload": messages(40, 20)}).to_string())
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("before".into(), "21".into()))
        .with_status(200)
        .with_body(json!({"payload": messages(20, 20)}).to_string())
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let items = client
        .execute(
            "message",
            "getAll",
            &json!({"conversationId": 9, "returnAll": false, "limit": 15}),
        )
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(items.len(), 15);
    assert_eq!(items[14]["id"], 26);
}

#[tokio::test]
async fn test_cursor_driver_limit_across_pages() {
    let mut server = Server::new_async().await;
    let path = account_path("/conversations/9/messages");
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::Regex("^$".into()))
        .with_status(200)
        .with_body(json!(messages(40, 20)).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("before".into(), "21".into()))
        .with_status(200)
        .with_body(json!(messages(20, 20)).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_http_client(&server.url());
    let items = request_all_messages(&client, 9, Some(25)).await.unwrap();

    second.assert_async().await;
    assert_eq!(items.len(), 25);
}
