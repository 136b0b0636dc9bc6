/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Chatwoot Client
//!
//! A client for the Chatwoot REST API designed to be driven by a workflow-automation host.
//!
//! The host resolves the parameters of a node into a JSON map and hands them to
//! [`application::client::Client::execute`] together with a resource and an operation
//! name. The client turns the pair into a [`model::requests::RequestDescriptor`], performs
//! the HTTP call(s) and returns one JSON value per output item.
//!
//! ## Features
//!
//! - Account, platform (super-admin) and public (token-less) API scopes
//! - Status-code aware error messages for failed calls
//! - Page-number pagination for list endpoints
//! - Before-id cursor pagination for conversation messages
//! - Webhook receiver with event allow-list filtering and webhook registration
//!
//! ## Example
//!
//! ```ignore
//! use chatwoot_client::prelude::*;
//! use serde_json::json;
//!
//! let config = Config::new();
//! let client = Client::new(config)?;
//!
//! let contacts = client
//!     .execute("contact", "getAll", &json!({ "returnAll": true }))
//!     .await?;
//! ```

/// Application layer: configuration, client, operations and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request executor, request descriptors and helpers
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;
/// Webhook receiver for Chatwoot events
pub mod webhook;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
