use crate::application::config::WebhookConfig;
use crate::error::ChatwootResult;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event accepted by the webhook trigger
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `message_created`
    pub event: String,
    /// Parsed request body
    pub payload: Value,
    /// Request body as received, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
    /// Time the delivery was received
    pub received_at: DateTime<Utc>,
}

/// Decides whether a webhook delivery produces an event
///
/// # Arguments
/// * `body` - Raw request body
/// * `config` - Subscribed events and raw body option
///
/// # Returns
/// * `Ok(Some(WebhookEvent))` - The delivery carries a subscribed event
/// * `Ok(None)` - No `event` field, or an event that is not subscribed
/// * `Err(AppError::Json)` - The body is not JSON
pub fn filter_webhook(body: &[u8], config: &WebhookConfig) -> ChatwootResult<Option<WebhookEvent>> {
    let payload: Value = serde_json::from_slice(body)?;
    let event = match payload.get("event").and_then(Value::as_str) {
        Some(event) if config.is_subscribed(event) => event.to_string(),
        _ => return Ok(None),
    };

    let raw_body = config
        .include_raw_body
        .then(|| String::from_utf8_lossy(body).into_owned());

    Ok(Some(WebhookEvent {
        event,
        payload,
        raw_body,
        received_at: Utc::now(),
    }))
}
