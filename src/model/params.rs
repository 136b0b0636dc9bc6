use crate::error::{AppError, ChatwootResult};
use crate::model::utils::{compact_object, validate_id, validate_path_segment, validate_string};
use crate::utils::config::{parse_flag, split_list};
use serde_json::{Map, Value};

/// Parameter values resolved by the host for one workflow item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    /// Wraps a resolved parameter map
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Raw value of a parameter
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Required positive integer identifier
    pub fn id(&self, name: &str) -> ChatwootResult<u64> {
        validate_id(self.get(name).unwrap_or(&Value::Null), name)
    }

    /// Optional identifier; missing, null and blank values are `None`
    pub fn optional_id(&self, name: &str) -> ChatwootResult<Option<u64>> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(value) => validate_id(value, name).map(Some),
        }
    }

    /// Required non-empty string, trimmed
    pub fn string(&self, name: &str) -> ChatwootResult<String> {
        validate_string(self.get(name).unwrap_or(&Value::Null), name)
    }

    /// Required string identifier that becomes one URL path segment
    pub fn segment(&self, name: &str) -> ChatwootResult<String> {
        validate_path_segment(self.get(name).unwrap_or(&Value::Null), name)
    }

    /// Optional string; missing, non-string and blank values are `None`
    pub fn optional_string(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }

    /// Boolean flag, accepting JSON booleans and the string spellings of [`parse_flag`]
    pub fn bool(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => parse_flag(s).unwrap_or(default),
            _ => default,
        }
    }

    /// Optional positive count such as `limit`
    pub fn optional_count(&self, name: &str) -> ChatwootResult<Option<usize>> {
        Ok(self.optional_id(name)?.map(|n| n as usize))
    }

    /// Object parameter with null and blank entries dropped
    ///
    /// Strings are parsed as JSON objects, which is how hosts usually pass
    /// free-form JSON fields. A missing parameter yields an empty map.
    pub fn object(&self, name: &str) -> ChatwootResult<Map<String, Value>> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(compact_object(map.clone())),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(Map::new()),
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s)
                .map_err(|e| AppError::configuration(format!("invalid {name}: {e}")))?
            {
                Value::Object(map) => Ok(compact_object(map)),
                _ => Err(AppError::configuration(format!(
                    "invalid {name}: expected a JSON object"
                ))),
            },
            Some(other) => Err(AppError::configuration(format!(
                "invalid {name}: expected an object, got {other}"
            ))),
        }
    }

    /// List of strings from an array or a comma-separated string
    pub fn string_list(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Some(Value::String(s)) => split_list(s),
            _ => Vec::new(),
        }
    }

    /// List of identifiers from an array or a comma-separated string
    pub fn id_list(&self, name: &str) -> ChatwootResult<Vec<u64>> {
        match self.get(name) {
            Some(Value::Array(items)) => items.iter().map(|item| validate_id(item, name)).collect(),
            Some(Value::String(s)) => split_list(s)
                .iter()
                .map(|item| validate_id(&Value::String(item.clone()), name))
                .collect(),
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(other) => validate_id(other, name).map(|id| vec![id]),
        }
    }

    /// The `additionalFields` object every operation accepts
    pub fn additional_fields(&self) -> ChatwootResult<Map<String, Value>> {
        self.object("additionalFields")
    }
}

impl From<Map<String, Value>> for Params {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

impl From<&Value> for Params {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map.clone()),
            _ => Self::default(),
        }
    }
}
