/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::SUPPORTED_WEBHOOK_EVENTS;
use crate::error::{AppError, ChatwootResult};
use crate::utils::config::{get_env_flag, get_env_list, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Credentials for the Chatwoot API
///
/// The account-scoped API needs `account_id` and `api_access_token`, the platform
/// API needs `platform_token` and the public API needs `inbox_identifier`. Only the
/// fields of the scopes actually used have to be present.
pub struct Credentials {
    /// Base URL of the Chatwoot installation, e.g. `https://app.chatwoot.com`
    pub base_url: String,
    /// Account identifier for account-scoped endpoints
    pub account_id: Option<String>,
    /// User access token sent in the `api_access_token` header
    pub api_access_token: Option<String>,
    /// Platform app token for super-admin endpoints
    pub platform_token: Option<String>,
    /// Inbox identifier for the public client API
    pub inbox_identifier: Option<String>,
}

impl Credentials {
    /// Credentials for the account-scoped API
    pub fn account(
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        api_access_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            account_id: Some(account_id.into()),
            api_access_token: Some(api_access_token.into()),
            ..Default::default()
        }
    }

    /// Credentials for the platform (super-admin) API
    pub fn platform(base_url: impl Into<String>, platform_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            platform_token: Some(platform_token.into()),
            ..Default::default()
        }
    }

    /// Credentials for the unauthenticated public API
    pub fn public(base_url: impl Into<String>, inbox_identifier: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            inbox_identifier: Some(inbox_identifier.into()),
            ..Default::default()
        }
    }

    /// Account identifier, required for account-scoped calls
    pub fn require_account_id(&self) -> ChatwootResult<&str> {
        require("account id", self.account_id.as_deref())
    }

    /// Access token, required for account-scoped calls
    pub fn require_api_access_token(&self) -> ChatwootResult<&str> {
        require("API access token", self.api_access_token.as_deref())
    }

    /// Platform token, required for platform calls
    pub fn require_platform_token(&self) -> ChatwootResult<&str> {
        require("platform token", self.platform_token.as_deref())
    }

    /// Inbox identifier, required for public calls
    pub fn require_inbox_identifier(&self) -> ChatwootResult<&str> {
        require("inbox identifier", self.inbox_identifier.as_deref())
    }
}

fn require<'a>(name: &str, value: Option<&'a str>) -> ChatwootResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::configuration(format!(
            "missing {name} in credentials"
        ))),
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Configuration for the REST API transport
pub struct RestApiConfig {
    /// Request timeout in seconds. `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Configuration for the webhook trigger
pub struct WebhookConfig {
    /// Subscribed event names; other events are ignored
    pub events: Vec<String>,
    /// Whether the raw request body is attached to emitted events
    pub include_raw_body: bool,
}

impl WebhookConfig {
    /// Creates a webhook configuration, validating the event names
    pub fn new(events: Vec<String>, include_raw_body: bool) -> ChatwootResult<Self> {
        let config = Self {
            events,
            include_raw_body,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that at least one event is subscribed and that all of them are known
    pub fn validate(&self) -> ChatwootResult<()> {
        if self.events.is_empty() {
            return Err(AppError::configuration(
                "webhook trigger needs at least one subscribed event",
            ));
        }
        if let Some(unknown) = self
            .events
            .iter()
            .find(|e| !SUPPORTED_WEBHOOK_EVENTS.contains(&e.as_str()))
        {
            return Err(AppError::configuration(format!(
                "unknown webhook event \"{unknown}\""
            )));
        }
        Ok(())
    }

    /// Whether an event name is on the allow-list
    pub fn is_subscribed(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Chatwoot API client
pub struct Config {
    /// API credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Webhook trigger configuration
    pub webhook: WebhookConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and a `.env` file if present)
    ///
    /// Reads `CHATWOOT_BASE_URL`, `CHATWOOT_ACCOUNT_ID`, `CHATWOOT_API_ACCESS_TOKEN`,
    /// `CHATWOOT_PLATFORM_TOKEN`, `CHATWOOT_INBOX_IDENTIFIER`, `CHATWOOT_TIMEOUT_SECS`,
    /// `CHATWOOT_WEBHOOK_EVENTS` and `CHATWOOT_WEBHOOK_RAW_BODY`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("CHATWOOT_BASE_URL", String::new());
        if base_url.is_empty() {
            error!("CHATWOOT_BASE_URL not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                base_url,
                account_id: get_env_or_none("CHATWOOT_ACCOUNT_ID"),
                api_access_token: get_env_or_none("CHATWOOT_API_ACCESS_TOKEN"),
                platform_token: get_env_or_none("CHATWOOT_PLATFORM_TOKEN"),
                inbox_identifier: get_env_or_none("CHATWOOT_INBOX_IDENTIFIER"),
            },
            rest_api: RestApiConfig {
                timeout_secs: get_env_or_none("CHATWOOT_TIMEOUT_SECS"),
            },
            webhook: WebhookConfig {
                events: get_env_list("CHATWOOT_WEBHOOK_EVENTS"),
                include_raw_body: get_env_flag("CHATWOOT_WEBHOOK_RAW_BODY", false),
            },
        }
    }

    /// Creates a configuration from explicit credentials without reading the environment
    pub fn with_credentials(credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig::default(),
            webhook: WebhookConfig::default(),
        }
    }
}
