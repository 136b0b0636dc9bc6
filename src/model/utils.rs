/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::{AppError, ChatwootResult};
use serde_json::{Map, Value};

/// Coerces a JSON value to a number the way a loose numeric conversion does
///
/// `null` and blank strings become `0`, booleans become `1`/`0`, numeric strings
/// are parsed and everything else is `NaN`. Unsigned `0x`, `0o` and `0b` literals
/// are read in their radix.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else if let Some(number) = parse_radix_literal(trimmed) {
                number
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let number = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    Some(number)
}

/// Validates that a value is a finite positive integer identifier
///
/// # Arguments
/// * `value` - Raw value supplied by the host
/// * `field` - Field name used in the error message
///
/// # Returns
/// * `Ok(u64)` - The identifier
/// * `Err(AppError::Configuration)` - For `NaN`, infinities, zero, negatives and fractions
pub fn validate_id(value: &Value, field: &str) -> ChatwootResult<u64> {
    let number = coerce_number(value);
    if !number.is_finite() || number <= 0.0 || number.fract() != 0.0 || number > u64::MAX as f64
    {
        return Err(AppError::configuration(format!(
            "invalid {field}: expected a positive integer, got {value}"
        )));
    }
    Ok(number as u64)
}

/// Validates that a value is a string with content, returning it trimmed
pub fn validate_string(value: &Value, field: &str) -> ChatwootResult<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::String(_) => Err(AppError::configuration(format!(
            "invalid {field}: must not be empty"
        ))),
        other => Err(AppError::configuration(format!(
            "invalid {field}: expected a string, got {other}"
        ))),
    }
}

/// Validates a string that is placed into a URL path as a single segment
///
/// Only unreserved characters (ASCII letters, digits, `-`, `_`, `.`, `~`) are
/// accepted, and `.`/`..` are rejected, so the value cannot leave its segment.
pub fn validate_path_segment(value: &Value, field: &str) -> ChatwootResult<String> {
    let segment = validate_string(value, field)?;
    let unreserved = segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if !unreserved || segment == "." || segment == ".." {
        return Err(AppError::configuration(format!(
            "invalid {field}: {segment:?} is not a valid path segment"
        )));
    }
    Ok(segment)
}

/// Projects every record onto the requested fields that are present
///
/// Values are copied verbatim, including `null`, `false`, `0`, nested objects and
/// arrays. Records that are not objects become empty objects, so the output always
/// has the length of the input.
pub fn simplify_response<S: AsRef<str>>(records: &[Value], fields: &[S]) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            let mut simplified = Map::new();
            if let Value::Object(source) = record {
                for field in fields {
                    let field = field.as_ref();
                    if let Some(value) = source.get(field) {
                        simplified.insert(field.to_string(), value.clone());
                    }
                }
            }
            Value::Object(simplified)
        })
        .collect()
}

/// Removes null values and blank strings from a JSON object
pub fn compact_object(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
        .collect()
}
