use crate::application::operations::{body_with, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::Value;

/// Builds a canned response operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => plain_list(
            params,
            RequestDescriptor::get("/canned_responses")
                .with_query("search", params.optional_string("search")),
        ),
        "create" => {
            let body = body_with(
                params,
                vec![
                    ("short_code", Some(Value::from(params.string("shortCode")?))),
                    ("content", Some(Value::from(params.string("content")?))),
                ],
            )?;
            Ok(RequestDescriptor::post("/canned_responses").with_body(body))
        }
        "update" => {
            let path = canned_response_path(params)?;
            let body = body_with(
                params,
                vec![
                    (
                        "short_code",
                        params.optional_string("shortCode").map(Value::from),
                    ),
                    ("content", params.optional_string("content").map(Value::from)),
                ],
            )?;
            Ok(RequestDescriptor::patch(path)
                .with_body(require_non_empty(body, "canned response update")?))
        }
        "delete" => Ok(RequestDescriptor::delete(canned_response_path(params)?)),
        _ => Err(AppError::unsupported("cannedResponse", operation)),
    }
}

fn canned_response_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!(
        "/canned_responses/{}",
        params.id("cannedResponseId")?
    ))
}
