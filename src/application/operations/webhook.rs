use crate::application::operations::{body_with, require_non_empty};
use crate::constants::SUPPORTED_WEBHOOK_EVENTS;
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{RequestDescriptor, ResponseMode};
use serde_json::Value;

/// Builds an account webhook operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => {
            let limit = if params.bool("returnAll", true) {
                None
            } else {
                params.optional_count("limit")?
            };
            // {"payload": {"webhooks": [...]}}
            Ok(RequestDescriptor::get("/webhooks")
                .with_unwrap("payload")
                .with_mode(ResponseMode::List {
                    property: "webhooks",
                    limit,
                }))
        }
        "create" => {
            let subscriptions = subscriptions(params)?;
            if subscriptions.is_empty() {
                return Err(AppError::configuration(
                    "invalid subscriptions: must not be empty",
                ));
            }
            let body = body_with(
                params,
                vec![
                    ("url", Some(Value::from(params.string("url")?))),
                    ("subscriptions", Some(Value::from(subscriptions))),
                ],
            )?;
            Ok(RequestDescriptor::post("/webhooks")
                .with_body(body)
                .with_unwrap("payload"))
        }
        "update" => {
            let path = webhook_path(params)?;
            let subscriptions = subscriptions(params)?;
            let body = body_with(
                params,
                vec![
                    ("url", params.optional_string("url").map(Value::from)),
                    (
                        "subscriptions",
                        (!subscriptions.is_empty()).then(|| Value::from(subscriptions)),
                    ),
                ],
            )?;
            Ok(RequestDescriptor::patch(path)
                .with_body(require_non_empty(body, "webhook update")?)
                .with_unwrap("payload"))
        }
        "delete" => Ok(RequestDescriptor::delete(webhook_path(params)?)),
        _ => Err(AppError::unsupported("webhook", operation)),
    }
}

fn webhook_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/webhooks/{}", params.id("webhookId")?))
}

fn subscriptions(params: &Params) -> ChatwootResult<Vec<String>> {
    let events = params.string_list("subscriptions");
    if let Some(unknown) = events
        .iter()
        .find(|e| !SUPPORTED_WEBHOOK_EVENTS.contains(&e.as_str()))
    {
        return Err(AppError::configuration(format!(
            "invalid subscriptions: unknown event \"{unknown}\""
        )));
    }
    Ok(events)
}
