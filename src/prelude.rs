/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Chatwoot Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Chatwoot Client library.
//!
//! ## Usage
//!
//! ```rust
//! use chatwoot_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config).expect("valid configuration");
//! # let _ = client;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Chatwoot API client
pub use crate::application::config::{Config, Credentials, RestApiConfig, WebhookConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types and result alias
pub use crate::error::{ApiError, AppError, ChatwootResult};

// ============================================================================
// CLIENT AND OPERATIONS
// ============================================================================

/// Operation executor and batch runner
pub use crate::application::client::{Client, error_item};

/// Resource names and request building
pub use crate::application::operations::{Resource, build_request};

/// Pagination drivers
pub use crate::application::pagination::{
    request_all_items, request_all_items_scoped, request_all_messages,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request executor seam and its HTTP implementation
pub use crate::model::http::{ChatwootApi, HttpClient, make_http_request};

/// Request descriptors and workflow items
pub use crate::model::requests::{ApiScope, RequestDescriptor, ResponseMode, WorkflowItem};

/// Parameter accessors
pub use crate::model::params::Params;

/// Validators and response projection
pub use crate::model::utils::{simplify_response, validate_id, validate_string};

// ============================================================================
// WEBHOOKS
// ============================================================================

/// Webhook registration service
pub use crate::application::services::{WebhookService, WebhookServiceImpl};

/// Webhook receiver
pub use crate::webhook::{WebhookEvent, WebhookState, filter_webhook, webhook_router};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// Constants
pub use crate::constants::*;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

pub use chrono::{DateTime, Utc};

pub use reqwest::Method;
