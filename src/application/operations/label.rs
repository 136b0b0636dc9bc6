use crate::application::operations::{body_with, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::Value;

/// Builds a label operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => plain_list(params, RequestDescriptor::get("/labels")),
        "create" => {
            let body = body_with(
                params,
                vec![("title", Some(Value::from(params.string("title")?)))],
            )?;
            Ok(RequestDescriptor::post("/labels").with_body(body))
        }
        "update" => {
            let path = label_path(params)?;
            let body = body_with(
                params,
                vec![("title", params.optional_string("title").map(Value::from))],
            )?;
            Ok(RequestDescriptor::patch(path).with_body(require_non_empty(body, "label update")?))
        }
        "delete" => Ok(RequestDescriptor::delete(label_path(params)?)),
        _ => Err(AppError::unsupported("label", operation)),
    }
}

fn label_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/labels/{}", params.id("labelId")?))
}
