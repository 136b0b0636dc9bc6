/// Module containing the account webhook registration service
pub mod webhook_service;

pub use crate::application::interfaces::webhook::WebhookService;
pub use webhook_service::WebhookServiceImpl;
