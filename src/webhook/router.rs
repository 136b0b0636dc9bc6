//! Router for the webhook trigger

use crate::application::config::WebhookConfig;
use crate::constants::WEBHOOK_PATH;
use crate::error::ChatwootResult;
use crate::webhook::event::{WebhookEvent, filter_webhook};
use axum::{Router, body::Bytes, extract::State, http::StatusCode, routing::post};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

/// Shared state of the webhook endpoint
#[derive(Clone)]
pub struct WebhookState {
    config: Arc<WebhookConfig>,
    sender: mpsc::Sender<WebhookEvent>,
}

impl WebhookState {
    /// Creates the endpoint state, rejecting invalid event lists
    pub fn new(config: WebhookConfig, sender: mpsc::Sender<WebhookEvent>) -> ChatwootResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            sender,
        })
    }

    /// The active webhook configuration
    pub fn config(&self) -> Arc<WebhookConfig> {
        self.config.clone()
    }
}

/// Handle one delivery from Chatwoot
async fn receive_webhook(State(state): State<WebhookState>, body: Bytes) -> StatusCode {
    match filter_webhook(&body, &state.config) {
        Ok(Some(event)) => {
            debug!("Accepted webhook event {}", event.event);
            if state.sender.send(event).await.is_err() {
                error!("Webhook event receiver has been dropped");
                return StatusCode::INTERNAL_SERVER_ERROR;
            }
            StatusCode::OK
        }
        Ok(None) => {
            debug!("Ignored webhook delivery");
            StatusCode::OK
        }
        Err(e) => {
            warn!("Rejected webhook delivery: {}", e);
            StatusCode::BAD_REQUEST
        }
    }
}

/// Create the webhook router
pub fn webhook_router(state: WebhookState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive_webhook))
        .with_state(state)
}
