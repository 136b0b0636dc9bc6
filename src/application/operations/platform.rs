//! Platform API operations
//!
//! These run with the platform app token against `/platform/api/v1` and manage
//! accounts and users across the installation.

use crate::application::operations::{body_with, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{ApiScope, RequestDescriptor};
use serde_json::Value;

/// Builds a platform account operation
pub fn build_account(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = match operation {
        "create" => {
            let body = body_with(
                params,
                vec![("name", Some(Value::from(params.string("name")?)))],
            )?;
            RequestDescriptor::post("/accounts").with_body(body)
        }
        "get" => RequestDescriptor::get(account_path(params)?),
        "update" => {
            let path = account_path(params)?;
            let body = body_with(
                params,
                vec![("name", params.optional_string("name").map(Value::from))],
            )?;
            RequestDescriptor::patch(path).with_body(require_non_empty(body, "account update")?)
        }
        "delete" => RequestDescriptor::delete(account_path(params)?),
        _ => return Err(AppError::unsupported("platformAccount", operation)),
    };
    Ok(descriptor.with_scope(ApiScope::Platform))
}

/// Builds a platform user operation
pub fn build_user(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = match operation {
        "create" => {
            let body = body_with(
                params,
                vec![
                    ("name", Some(Value::from(params.string("name")?))),
                    ("email", Some(Value::from(params.string("email")?))),
                    ("password", Some(Value::from(params.string("password")?))),
                ],
            )?;
            RequestDescriptor::post("/users").with_body(body)
        }
        "get" => RequestDescriptor::get(user_path(params)?),
        "update" => {
            let path = user_path(params)?;
            let body = body_with(
                params,
                vec![
                    ("name", params.optional_string("name").map(Value::from)),
                    ("email", params.optional_string("email").map(Value::from)),
                    (
                        "password",
                        params.optional_string("password").map(Value::from),
                    ),
                ],
            )?;
            RequestDescriptor::patch(path).with_body(require_non_empty(body, "user update")?)
        }
        "delete" => RequestDescriptor::delete(user_path(params)?),
        "getSsoLink" => RequestDescriptor::get(format!("{}/login", user_path(params)?)),
        _ => return Err(AppError::unsupported("platformUser", operation)),
    };
    Ok(descriptor.with_scope(ApiScope::Platform))
}

fn account_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/accounts/{}", params.id("platformAccountId")?))
}

fn user_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/users/{}", params.id("userId")?))
}
