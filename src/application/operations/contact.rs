use crate::application::operations::{body_with, paged_list, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::{Map, Value};

/// Builds a contact operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "create" => create(params),
        "get" => Ok(RequestDescriptor::get(contact_path(params)?).with_unwrap("payload")),
        "getAll" => get_all(params),
        "search" => search(params),
        "update" => update(params),
        "delete" => Ok(RequestDescriptor::delete(contact_path(params)?)),
        "getConversations" => plain_list(
            params,
            RequestDescriptor::get(format!("{}/conversations", contact_path(params)?)),
        ),
        "merge" => merge(params),
        _ => Err(AppError::unsupported("contact", operation)),
    }
}

fn contact_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!("/contacts/{}", params.id("contactId")?))
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let body = body_with(
        params,
        vec![
            ("inbox_id", Some(Value::from(params.id("inboxId")?))),
            ("name", params.optional_string("name").map(Value::from)),
            ("email", params.optional_string("email").map(Value::from)),
            (
                "phone_number",
                params.optional_string("phoneNumber").map(Value::from),
            ),
        ],
    )?;
    Ok(RequestDescriptor::post("/contacts")
        .with_body(body)
        .with_unwrap("payload"))
}

fn get_all(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = RequestDescriptor::get("/contacts")
        .with_query("sort", params.optional_string("sort"))
        .with_query_map(params.additional_fields()?);
    paged_list(params, descriptor)
}

fn search(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let descriptor = RequestDescriptor::get("/contacts/search")
        .with_query("q", params.string("query")?)
        .with_query_map(params.additional_fields()?);
    paged_list(params, descriptor)
}

fn update(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let path = contact_path(params)?;
    let mut body = params.additional_fields()?;
    let custom_attributes = params.object("customAttributes")?;
    if !custom_attributes.is_empty() {
        body.insert(
            "custom_attributes".to_string(),
            Value::Object(custom_attributes),
        );
    }
    Ok(RequestDescriptor::put(path)
        .with_body(require_non_empty(body, "contact update")?)
        .with_unwrap("payload"))
}

fn merge(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let base = params.id("baseContactId")?;
    let mergee = params.id("mergeeContactId")?;
    if base == mergee {
        return Err(AppError::configuration(
            "a contact cannot be merged into itself",
        ));
    }
    let mut body = Map::new();
    body.insert("base_contact_id".to_string(), Value::from(base));
    body.insert("mergee_contact_id".to_string(), Value::from(mergee));
    Ok(RequestDescriptor::post("/actions/contact_merge").with_body(body))
}
