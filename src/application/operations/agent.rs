use crate::application::operations::{body_with, one_of, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::Value;

const ROLES: [&str; 2] = ["agent", "administrator"];

/// Builds an agent operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => plain_list(params, RequestDescriptor::get("/agents")),
        "create" => create(params),
        "update" => update(params),
        "delete" => Ok(RequestDescriptor::delete(format!(
            "/agents/{}",
            params.id("agentId")?
        ))),
        _ => Err(AppError::unsupported("agent", operation)),
    }
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let role = one_of(
        params
            .optional_string("role")
            .unwrap_or_else(|| "agent".to_string()),
        "role",
        &ROLES,
    )?;
    let body = body_with(
        params,
        vec![
            ("name", Some(Value::from(params.string("name")?))),
            ("email", Some(Value::from(params.string("email")?))),
            ("role", Some(Value::from(role))),
        ],
    )?;
    Ok(RequestDescriptor::post("/agents").with_body(body))
}

fn update(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let agent_id = params.id("agentId")?;
    let role = params
        .optional_string("role")
        .map(|r| one_of(r, "role", &ROLES))
        .transpose()?;
    let body = body_with(params, vec![("role", role.map(Value::from))])?;
    Ok(RequestDescriptor::patch(format!("/agents/{agent_id}"))
        .with_body(require_non_empty(body, "agent update")?))
}
