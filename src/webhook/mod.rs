//! Webhook trigger
//!
//! Chatwoot posts one JSON object per event to the registered URL. Events outside the
//! configured allow-list are acknowledged and dropped; accepted ones are forwarded to a
//! channel the host consumes.

/// Inbound event type and the allow-list filter
pub mod event;
/// HTTP endpoint receiving webhook deliveries
pub mod router;

pub use event::{WebhookEvent, filter_webhook};
pub use router::{WebhookState, webhook_router};
