/// Webhook registration interface
pub mod webhook;
