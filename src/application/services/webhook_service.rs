use crate::application::interfaces::webhook::WebhookService;
use crate::error::{AppError, ChatwootResult};
use crate::model::http::ChatwootApi;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the webhook registration service
pub struct WebhookServiceImpl<T: ChatwootApi + ?Sized> {
    client: Arc<T>,
}

impl<T: ChatwootApi + ?Sized> WebhookServiceImpl<T> {
    /// Creates a new instance of the webhook service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

fn webhook_id(value: &Value) -> Option<u64> {
    match value.get("id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl<T: ChatwootApi + ?Sized + 'static> WebhookService for WebhookServiceImpl<T> {
    async fn check_exists(&self, url: &str) -> ChatwootResult<Option<u64>> {
        let response = self
            .client
            .request(Method::GET, "/webhooks", None, None)
            .await?;

        let webhooks = response
            .pointer("/payload/webhooks")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        debug!("{} webhook(s) registered", webhooks.len());

        Ok(webhooks
            .iter()
            .find(|w| w.get("url").and_then(Value::as_str) == Some(url))
            .and_then(webhook_id))
    }

    async fn create(&self, url: &str, events: &[String]) -> ChatwootResult<u64> {
        info!("Registering webhook {} for {:?}", url, events);
        let body = json!({"url": url, "subscriptions": events});
        let response = self
            .client
            .request(Method::POST, "/webhooks", Some(&body), None)
            .await?;

        let webhook = response
            .pointer("/payload/webhook")
            .or_else(|| response.get("payload"))
            .unwrap_or(&response);
        webhook_id(webhook).ok_or_else(|| {
            AppError::Deserialization(format!("webhook id missing in response: {response}"))
        })
    }

    async fn delete(&self, id: u64) -> ChatwootResult<()> {
        info!("Deleting webhook {}", id);
        self.client
            .request(Method::DELETE, &format!("/webhooks/{id}"), None, None)
            .await?;
        Ok(())
    }
}
