use crate::application::operations::{body_with, one_of, plain_list};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::{RequestDescriptor, ResponseMode};
use serde_json::{Map, Value};

const STATUSES: [&str; 4] = ["open", "resolved", "pending", "snoozed"];
const LIST_STATUSES: [&str; 5] = ["open", "resolved", "pending", "snoozed", "all"];
const ASSIGNEE_TYPES: [&str; 4] = ["me", "unassigned", "all", "assigned"];
const PRIORITIES: [&str; 5] = ["urgent", "high", "medium", "low", "none"];

/// Builds a conversation operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "create" => create(params),
        "get" => Ok(RequestDescriptor::get(conversation_path(params)?)),
        "getAll" => get_all(params),
        "toggleStatus" => toggle_status(params),
        "togglePriority" => toggle_priority(params),
        "assign" => assign(params),
        "addLabels" => add_labels(params),
        "getLabels" => plain_list(
            params,
            RequestDescriptor::get(format!("{}/labels", conversation_path(params)?)),
        ),
        "updateCustomAttributes" => update_custom_attributes(params),
        _ => Err(AppError::unsupported("conversation", operation)),
    }
}

fn conversation_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/conversations/{}", params.id("conversationId")?))
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let status = params
        .optional_string("status")
        .map(|s| one_of(s, "status", &STATUSES))
        .transpose()?;
    let message = params.optional_string("message").map(|content| {
        let mut message = Map::new();
        message.insert("content".to_string(), Value::from(content));
        Value::Object(message)
    });
    let body = body_with(
        params,
        vec![
            ("source_id", Some(Value::from(params.string("sourceId")?))),
            ("inbox_id", Some(Value::from(params.id("inboxId")?))),
            (
                "contact_id",
                params.optional_id("contactId")?.map(Value::from),
            ),
            ("status", status.map(Value::from)),
            (
                "assignee_id",
                params.optional_id("assigneeId")?.map(Value::from),
            ),
            ("team_id", params.optional_id("teamId")?.map(Value::from)),
            ("message", message),
        ],
    )?;
    Ok(RequestDescriptor::post("/conversations").with_body(body))
}

/// Lists one page of conversations; the list endpoint nests items under `data.payload`
fn get_all(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let status = one_of(
        params
            .optional_string("status")
            .unwrap_or_else(|| "open".to_string()),
        "status",
        &LIST_STATUSES,
    )?;
    let assignee_type = one_of(
        params
            .optional_string("assigneeType")
            .unwrap_or_else(|| "all".to_string()),
        "assigneeType",
        &ASSIGNEE_TYPES,
    )?;
    let labels = params.string_list("labels");

    let mut descriptor = RequestDescriptor::get("/conversations")
        .with_query("status", status)
        .with_query("assignee_type", assignee_type)
        .with_query("inbox_id", params.optional_id("inboxId")?)
        .with_query("team_id", params.optional_id("teamId")?)
        .with_query("q", params.optional_string("query"))
        .with_query("page", params.optional_id("page")?.unwrap_or(1))
        .with_query_map(params.additional_fields()?)
        .with_unwrap("data")
        .with_mode(ResponseMode::list(params.optional_count("limit")?));
    if !labels.is_empty() {
        descriptor = descriptor.with_query("labels", labels);
    }
    Ok(descriptor)
}

fn toggle_status(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = conversation_path(params)?;
    let status = one_of(params.string("status")?, "status", &STATUSES)?;
    let body = body_with(params, vec![("status", Some(Value::from(status)))])?;
    Ok(RequestDescriptor::post(format!("{path}/toggle_status")).with_body(body))
}

fn toggle_priority(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = conversation_path(params)?;
    let priority = one_of(params.string("priority")?, "priority", &PRIORITIES)?;
    let mut body = Map::new();
    body.insert("priority".to_string(), Value::from(priority));
    Ok(RequestDescriptor::post(format!("{path}/toggle_priority")).with_body(body))
}

fn assign(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = conversation_path(params)?;
    let assignee = params.optional_id("assigneeId")?;
    let team = params.optional_id("teamId")?;
    if assignee.is_none() && team.is_none() {
        return Err(AppError::configuration(
            "conversation assign: provide assigneeId or teamId",
        ));
    }
    let mut body = Map::new();
    if let Some(id) = assignee {
        body.insert("assignee_id".to_string(), Value::from(id));
    }
    if let Some(id) = team {
        body.insert("team_id".to_string(), Value::from(id));
    }
    Ok(RequestDescriptor::post(format!("{path}/assignments")).with_body(body))
}

fn add_labels(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = conversation_path(params)?;
    let labels = params.string_list("labels");
    if labels.is_empty() {
        return Err(AppError::configuration("invalid labels: must not be empty"));
    }
    let mut body = Map::new();
    body.insert("labels".to_string(), Value::from(labels));
    Ok(RequestDescriptor::post(format!("{path}/labels"))
        .with_body(body)
        .with_mode(ResponseMode::list(None)))
}

fn update_custom_attributes(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = conversation_path(params)?;
    let attributes = params.object("customAttributes")?;
    if attributes.is_empty() {
        return Err(AppError::configuration(
            "invalid customAttributes: must not be empty",
        ));
    }
    let mut body = Map::new();
    body.insert("custom_attributes".to_string(), Value::Object(attributes));
    Ok(RequestDescriptor::post(format!("{path}/custom_attributes")).with_body(body))
}
