use crate::application::operations::{body_with, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::Value;

/// Builds an account operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "get" => Ok(get()),
        "update" => update(params),
        _ => Err(AppError::unsupported("account", operation)),
    }
}

/// Details of the configured account
pub fn get() -> RequestDescriptor {
    RequestDescriptor::get("")
}

/// Updates name, locale, domain or support email of the account
pub fn update(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let body = body_with(
        params,
        vec![("name", params.optional_string("name").map(Value::from))],
    )?;
    Ok(RequestDescriptor::patch("").with_body(require_non_empty(body, "account update")?))
}
