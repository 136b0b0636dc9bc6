use chatwoot_client::application::config::WebhookConfig;
use chatwoot_client::webhook::filter_webhook;
use serde_json::json;

fn config(events: &[&str]) -> WebhookConfig {
    WebhookConfig::new(events.iter().map(|e| e.to_string()).collect(), false).unwrap()
}

#[test]
fn test_filter_keeps_whole_payload() {
    let body = json!({
        "event": "conversation_status_changed",
        "id": 12,
        "status": "resolved",
        "meta": {"sender": {"id": 3}}
    });
    let bytes = serde_json::to_vec(&body).unwrap();
    let event = filter_webhook(&bytes, &config(&["conversation_status_changed"]))
        .unwrap()
        .unwrap();
    assert_eq!(event.event, "conversation_status_changed");
    assert_eq!(event.payload, body);
}

#[test]
fn test_filter_respects_allow_list() {
    let cfg = config(&["message_created", "message_updated"]);
    for (event, expected) in [
        ("message_created", true),
        ("message_updated", true),
        ("conversation_created", false),
        ("MESSAGE_CREATED", false),
    ] {
        let bytes = serde_json::to_vec(&json!({"event": event})).unwrap();
        assert_eq!(filter_webhook(&bytes, &cfg).unwrap().is_some(), expected, "{event}");
    }
}

#[test]
fn test_filter_non_object_json_is_ignored() {
    let cfg = config(&["message_created"]);
    assert!(filter_webhook(b"[1, 2, 3]", &cfg).unwrap().is_none());
    assert!(filter_webhook(b"\"message_created\"", &cfg).unwrap().is_none());
}

#[test]
fn test_filter_rejects_empty_body() {
    assert!(filter_webhook(b"", &config(&["message_created"])).is_err());
}

#[test]
fn test_event_serializes_without_raw_body() {
    let bytes = br#"{"event":"contact_created","id":1}"#;
    let event = filter_webhook(bytes, &config(&["contact_created"]))
        .unwrap()
        .unwrap();
    let value = serde_json::to_value(&event).unwrap();
    assert!(value.get("raw_body").is_none());
    assert_eq!(value["event"], "contact_created");
    assert!(value["received_at"].is_string());
}
