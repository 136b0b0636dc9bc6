use crate::application::operations::{body_with, one_of};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{RequestDescriptor, ResponseMode};
use serde_json::Value;

const MESSAGE_TYPES: [&str; 2] = ["outgoing", "incoming"];
const DEFAULT_LIMIT: usize = 50;

/// Builds a message operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "create" => create(params),
        "getAll" => get_all(params),
        "delete" => Ok(RequestDescriptor::delete(format!(
            "/conversations/{}/messages/{}",
            params.id("conversationId")?,
            params.id("messageId")?
        ))),
        _ => Err(AppError::unsupported("message", operation)),
    }
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let conversation_id = params.id("conversationId")?;
    let message_type = one_of(
        params
            .optional_string("messageType")
            .unwrap_or_else(|| "outgoing".to_string()),
        "messageType",
        &MESSAGE_TYPES,
    )?;
    let content_attributes = params.object("contentAttributes")?;
    let body = body_with(
        params,
        vec![
            ("content", Some(Value::from(params.string("content")?))),
            ("message_type", Some(Value::from(message_type))),
            ("private", Some(Value::from(params.bool("private", false)))),
            (
                "content_type",
                params.optional_string("contentType").map(Value::from),
            ),
            (
                "content_attributes",
                (!content_attributes.is_empty()).then(|| Value::Object(content_attributes)),
            ),
        ],
    )?;
    Ok(RequestDescriptor::post(format!("/conversations/{conversation_id}/messages")).with_body(body))
}

/// Message history through the `before` cursor; without `returnAll` at most `limit` (default 50)
fn get_all(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let conversation_id = params.id("conversationId")?;
    let limit = if params.bool("returnAll", true) {
        None
    } else {
        Some(params.optional_count("limit")?.unwrap_or(DEFAULT_LIMIT))
    };
    Ok(
        RequestDescriptor::get(format!("/conversations/{conversation_id}/messages")).with_mode(
            ResponseMode::Messages {
                conversation_id,
                limit,
            },
        ),
    )
}
