use crate::application::operations::{body_with, one_of, plain_list, require_non_empty};
use crate::error::{AppError, ChatwootResult};
use crate::model::params::Params;
use crate::model::requests::RequestDescriptor;
use serde_json::Value;

const DISPLAY_TYPES: [&str; 8] = [
    "text", "number", "currency", "percent", "link", "date", "list", "checkbox",
];

/// Maps the attribute model name to the numeric value the API expects
fn attribute_model(name: &str) -> ChatwootResult<u8> {
    match name {
        "conversation" => Ok(0),
        "contact" => Ok(1),
        other => Err(AppError::configuration(format!(
            "invalid attributeModel: \"{other}\" is not one of conversation, contact"
        ))),
    }
}

/// Builds a custom attribute definition operation
pub fn build(operation: &str, params: &Params) -> ChatwootResult<RequestDescriptor> {
    match operation {
        "getAll" => {
            let model = attribute_model(
                &params
                    .optional_string("attributeModel")
                    .unwrap_or_else(|| "conversation".to_string()),
            )?;
            plain_list(
                params,
                RequestDescriptor::get("/custom_attribute_definitions")
                    .with_query("attribute_model", model),
            )
        }
        "create" => create(params),
        "update" => {
            let path = definition_path(params)?;
            let body = body_with(
                params,
                vec![(
                    "attribute_display_name",
                    params.optional_string("displayName").map(Value::from),
                )],
            )?;
            Ok(RequestDescriptor::patch(path)
                .with_body(require_non_empty(body, "custom attribute update")?))
        }
        "delete" => Ok(RequestDescriptor::delete(definition_path(params)?)),
        _ => Err(AppError::unsupported("customAttribute", operation)),
    }
}

fn definition_path(params: &Params) -> ChatwootResult<String> {
    Ok(format!(
        "/custom_attribute_definitions/{}",
        params.id("customAttributeId")?
    ))
}

fn create(params: &Params) -> ChatwootResult<RequestDescriptor> {
    let display_type = one_of(
        params
            .optional_string("displayType")
            .unwrap_or_else(|| "text".to_string()),
        "displayType",
        &DISPLAY_TYPES,
    )?;
    let model = attribute_model(&params.string("attributeModel")?)?;
    let body = body_with(
        params,
        vec![
            (
                "attribute_display_name",
                Some(Value::from(params.string("displayName")?)),
            ),
            ("attribute_key", Some(Value::from(params.string("key")?))),
            ("attribute_display_type", Some(Value::from(display_type))),
            ("attribute_model", Some(Value::from(model))),
        ],
    )?;
    Ok(RequestDescriptor::post("/custom_attribute_definitions").with_body(body))
}
