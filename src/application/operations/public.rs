//! Public client API operations
//!
//! Endpoints are relative to `/public/api/v1/inboxes/{inbox_identifier}` and need no
//! access token. Contacts are addressed by the source id returned on creation.

use crate::application::operations::{body_with, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{ApiScope, RequestDescriptor};
use serde_json::{Map, Value};

/// Builds a public contact operation
pub fn build_contact(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = match operation {
        "create" => {
            let body = body_with(
                params,
                vec![
                    ("name", params.optional_string("name").map(Value::from)),
                    ("email", params.optional_string("email").map(Value::from)),
                ],
            )?;
            RequestDescriptor::post("/contacts").with_body(body)
        }
        "get" => RequestDescriptor::get(contact_path(params)?),
        "update" => {
            let path = contact_path(params)?;
            let body = body_with(
                params,
                vec![
                    ("name", params.optional_string("name").map(Value::from)),
                    ("email", params.optional_string("email").map(Value::from)),
                ],
            )?;
            RequestDescriptor::patch(path).with_body(require_non_empty(body, "contact update")?)
        }
        _ => return Err(AppError::unsupported("publicContact", operation)),
    };
    Ok(descriptor.with_scope(ApiScope::Public))
}

/// Builds a public conversation operation
pub fn build_conversation(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = match operation {
        "create" => {
            let path = format!("{}/conversations", contact_path(params)?);
            let mut body = params.additional_fields()?;
            let custom_attributes = params.object("customAttributes")?;
            if !custom_attributes.is_empty() {
                body.insert(
                    "custom_attributes".to_string(),
                    Value::Object(custom_attributes),
                );
            }
            RequestDescriptor::post(path).with_body(body)
        }
        "getAll" => plain_list(
            params,
            RequestDescriptor::get(format!("{}/conversations", contact_path(params)?)),
        )?,
        "toggleStatus" => {
            RequestDescriptor::post(format!("{}/toggle_status", conversation_path(params)?))
                .with_body(Map::new())
        }
        _ => return Err(AppError::unsupported("publicConversation", operation)),
    };
    Ok(descriptor.with_scope(ApiScope::Public))
}

/// Builds a public message operation
pub fn build_message(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = match operation {
        "create" => {
            let body = body_with(
                params,
                vec![
                    ("content", Some(Value::from(params.string("content")?))),
                    ("echo_id", params.optional_string("echoId").map(Value::from)),
                ],
            )?;
            RequestDescriptor::post(format!("{}/messages", conversation_path(params)?))
                .with_body(body)
        }
        "getAll" => plain_list(
            params,
            RequestDescriptor::get(format!("{}/messages", conversation_path(params)?)),
        )?,
        "update" => {
            let path = format!(
                "{}/messages/{}",
                conversation_path(params)?,
                params.id("messageId")?
            );
            let submitted_values = params.object("submittedValues")?;
            if submitted_values.is_empty() {
                return Err(AppError::configuration(
                    "invalid submittedValues: must not be empty",
                ));
            }
            let mut body = Map::new();
            body.insert(
                "submitted_values".to_string(),
                Value::Object(submitted_values),
            );
            RequestDescriptor::patch(path).with_body(body)
        }
        _ => return Err(AppError::unsupported("publicMessage", operation)),
    };
    Ok(descriptor.with_scope(ApiScope::Public))
}

fn contact_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/contacts/{}", params.segment("contactIdentifier")?))
}

fn conversation_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!(
        "{}/conversations/{}",
        contact_path(params)?,
        params.id("conversationId")?
    ))
}
