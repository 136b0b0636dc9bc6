use crate::application::operations::{body_with, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::{Map, Value};

/// Builds an inbox operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => plain_list(params, RequestDescriptor::get("/inboxes")),
        "get" => Ok(RequestDescriptor::get(inbox_path(params)?)),
        "create" => create(params),
        "update" => update(params),
        "getAgents" => plain_list(
            params,
            RequestDescriptor::get(format!("/inbox_members/{}", params.id("inboxId")?)),
        ),
        "addAgents" => Ok(RequestDescriptor::post("/inbox_members")
            .with_body(members_body(params)?)
            .with_unwrap("payload")),
        "removeAgents" => {
            // DELETE bodies are dropped by the executor
            Ok(RequestDescriptor::delete("/inbox_members").with_query_map(members_body(params)?))
        }
        _ => Err(AppError::unsupported("inbox", operation)),
    }
}

fn inbox_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/inboxes/{}", params.id("inboxId")?))
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let mut channel = params.object("channel")?;
    if !channel.contains_key("type") {
        channel.insert("type".to_string(), Value::from("api"));
    }
    let body = body_with(
        params,
        vec![
            ("name", Some(Value::from(params.string("name")?))),
            ("channel", Some(Value::Object(channel))),
        ],
    )?;
    Ok(RequestDescriptor::post("/inboxes").with_body(body))
}

fn update(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = inbox_path(params)?;
    let body = body_with(
        params,
        vec![("name", params.optional_string("name").map(Value::from))],
    )?;
    Ok(RequestDescriptor::patch(path).with_body(require_non_empty(body, "inbox update")?))
}

fn members_body(params: &Params) -> ChatwootResult<Map<String, Value>> {
    let inbox_id = params.id("inboxId")?;
    let user_ids = params.id_list("agentIds")?;
    if user_ids.is_empty() {
        return Err(AppError::configuration("invalid agentIds: must not be empty"));
    }
    let mut body = Map::new();
    body.insert("inbox_id".to_string(), Value::from(inbox_id));
    body.insert("user_ids".to_string(), Value::from(user_ids));
    Ok(body)
}
