/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Mapping of `(resource, operation)` pairs onto request descriptors
//!
//! Every operation is a pure function from the host's resolved [`Params`] to a
//! [`RequestDescriptor`]; nothing here touches the network. Unknown pairs fail with
//! [`AppError::UnsupportedOperation`] before any parameter is read.

/// Account operations
pub mod account;
/// Agent operations
pub mod agent;
/// Canned response operations
pub mod canned_response;
/// Contact operations
pub mod contact;
/// Conversation operations
pub mod conversation;
/// Custom attribute definition operations
pub mod custom_attribute;
/// Inbox operations
pub mod inbox;
/// Label operations
pub mod label;
/// Message operations
pub mod message;
/// Platform (super-admin) operations
pub mod platform;
/// Public client API operations
pub mod public;
/// Team operations
pub mod team;
/// Account webhook operations
pub mod webhook;

use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{RequestDescriptor, ResponseMode};
use serde_json::{Map, Value};
use std::fmt;

/// Resources exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The account itself
    Account,
    /// Agents of the account
    Agent,
    /// Contacts
    Contact,
    /// Conversations
    Conversation,
    /// Conversation messages
    Message,
    /// Inboxes and their members
    Inbox,
    /// Teams and their members
    Team,
    /// Labels
    Label,
    /// Canned responses
    CannedResponse,
    /// Custom attribute definitions
    CustomAttribute,
    /// Account webhooks
    Webhook,
    /// Platform accounts
    PlatformAccount,
    /// Platform users
    PlatformUser,
    /// Public API contacts
    PublicContact,
    /// Public API conversations
    PublicConversation,
    /// Public API messages
    PublicMessage,
}

impl Resource {
    /// Every resource, in declaration order
    pub const ALL: [Resource; 16] = [
        Resource::Account,
        Resource::Agent,
        Resource::Contact,
        Resource::Conversation,
        Resource::Message,
        Resource::Inbox,
        Resource::Team,
        Resource::Label,
        Resource::CannedResponse,
        Resource::CustomAttribute,
        Resource::Webhook,
        Resource::PlatformAccount,
        Resource::PlatformUser,
        Resource::PublicContact,
        Resource::PublicConversation,
        Resource::PublicMessage,
    ];

    /// Name used by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Account => "account",
            Resource::Agent => "agent",
            Resource::Contact => "contact",
            Resource::Conversation => "conversation",
            Resource::Message => "message",
            Resource::Inbox => "inbox",
            Resource::Team => "team",
            Resource::Label => "label",
            Resource::CannedResponse => "cannedResponse",
            Resource::CustomAttribute => "customAttribute",
            Resource::Webhook => "webhook",
            Resource::PlatformAccount => "platformAccount",
            Resource::PlatformUser => "platformUser",
            Resource::PublicContact => "publicContact",
            Resource::PublicConversation => "publicConversation",
            Resource::PublicMessage => "publicMessage",
        }
    }

    /// Resource with the given host name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the request descriptor of a `(resource, operation)` pair
///
/// # Arguments
/// * `resource` - Resource name, e.g. `contact`
/// * `operation` - Operation name, e.g. `getAll`
/// * `params` - Resolved parameter values
///
/// # Returns
/// * `Ok(RequestDescriptor)` - What to send and how to read the response
/// * `Err(AppError::UnsupportedOperation)` - Unknown resource or operation
/// * `Err(AppError::Configuration)` - Invalid parameter values
pub fn build_request(
    resource: &str,
    operation: &str,
    params: &Params,
) -> ChatwootResult<RequestDescriptor> {
    let kind = Resource::from_name(resource)
        .ok_or_else(|| AppError::unsupported(resource, operation))?;

    match kind {
        Resource::Account => account::build(operation, params),
        Resource::Agent => agent::build(operation, params),
        Resource::Contact => contact::build(operation, params),
        Resource::Conversation => conversation::build(operation, params),
        Resource::Message => message::build(operation, params),
        Resource::Inbox => inbox::build(operation, params),
        Resource::Team => team::build(operation, params),
        Resource::Label => label::build(operation, params),
        Resource::CannedResponse => canned_response::build(operation, params),
        Resource::CustomAttribute => custom_attribute::build(operation, params),
        Resource::Webhook => webhook::build(operation, params),
        Resource::PlatformAccount => platform::build_account(operation, params),
        Resource::PlatformUser => platform::build_user(operation, params),
        Resource::PublicContact => public::build_contact(operation, params),
        Resource::PublicConversation => public::build_conversation(operation, params),
        Resource::PublicMessage => public::build_message(operation, params),
    }
}

/// Makes a page-number paginated `getAll`
///
/// `returnAll` (default `true`) drives every page; otherwise only `page` (default 1)
/// is fetched. `limit` truncates the items in both cases.
pub(crate) fn paged_list(
    params: &Params,
    descriptor: RequestDescriptor,
) -> ChatwootResult<RequestDescriptor> {
    let limit = params.optional_count("limit")?;
    if params.bool("returnAll", true) {
        Ok(descriptor.with_mode(ResponseMode::all_pages(limit)))
    } else {
        let page = params.optional_id("page")?.unwrap_or(1);
        Ok(descriptor
            .with_query("page", page)
            .with_mode(ResponseMode::list(limit)))
    }
}

/// Makes a `getAll` on an endpoint that answers with the whole list at once
pub(crate) fn plain_list(
    params: &Params,
    descriptor: RequestDescriptor,
) -> ChatwootResult<RequestDescriptor> {
    let limit = if params.bool("returnAll", true) {
        None
    } else {
        params.optional_count("limit")?
    };
    Ok(descriptor.with_mode(ResponseMode::list(limit)))
}

/// Body made of `additionalFields` with the explicit fields on top
pub(crate) fn body_with(
    params: &Params,
    fields: Vec<(&str, Option<Value>)>,
) -> ChatwootResult<Map<String, Value>> {
    let mut body = params.additional_fields()?;
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert(key.to_string(), value);
        }
    }
    Ok(body)
}

/// Fails when an update would send nothing
pub(crate) fn require_non_empty(
    body: Map<String, Value>,
    what: &str,
) -> ChatwootResult<Map<String, Value>> {
    if body.is_empty() {
        return Err(AppError::configuration(format!(
            "{what}: provide at least one field to update"
        )));
    }
    Ok(body)
}

/// Fails unless `value` is one of `allowed`
pub(crate) fn one_of(value: String, field: &str, allowed: &[&str]) -> ChatwootResult<String> {
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(AppError::configuration(format!(
            "invalid {field}: \"{value}\" is not one of {}",
            allowed.join(", ")
        )))
    }
}
