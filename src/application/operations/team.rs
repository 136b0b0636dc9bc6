use crate::application::operations::{body_with, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::{Map, Value};

/// Builds a team operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => plain_list(params, RequestDescriptor::get("/teams")),
        "get" => Ok(RequestDescriptor::get(team_path(params)?)),
        "create" => {
            let body = body_with(
                params,
                vec![("name", Some(Value::from(params.string("name")?)))],
            )?;
            Ok(RequestDescriptor::post("/teams").with_body(body))
        }
        "update" => {
            let path = team_path(params)?;
            let body = body_with(
                params,
                vec![("name", params.optional_string("name").map(Value::from))],
            )?;
            Ok(RequestDescriptor::patch(path).with_body(require_non_empty(body, "team update")?))
        }
        "delete" => Ok(RequestDescriptor::delete(team_path(params)?)),
        "getMembers" => plain_list(
            params,
            RequestDescriptor::get(format!("{}/team_members", team_path(params)?)),
        ),
        "addMembers" => Ok(
            RequestDescriptor::post(format!("{}/team_members", team_path(params)?))
                .with_body(members(params)?),
        ),
        "removeMembers" => Ok(
            RequestDescriptor::delete(format!("{}/team_members", team_path(params)?))
                .with_query_map(members(params)?),
        ),
        _ => Err(AppError::unsupported("team", operation)),
    }
}

fn team_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/teams/{}", params.id("teamId")?))
}

fn members(params: &Params) -> ChatwootResult<Map<String, Value>> {
    let user_ids = params.id_list("agentIds")?;
    if user_ids.is_empty() {
        return Err(AppError::configuration("invalid agentIds: must not be empty"));
    }
    let mut body = Map::new();
    body.insert("user_ids".to_string(), Value::from(user_ids));
    Ok(body)
}
