/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Result type used across the crate
pub type ChatwootResult<T> = Result<T, AppError>;

/// Failed API call with a resolved, human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Explanation resolved from the status code, or the transport message
    pub message: String,
    /// What was being attempted, e.g. `Failed to GET /contacts/5`
    pub description: String,
    /// HTTP status code of the failed response
    pub status: u16,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(message: impl Into<String>, description: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
            status,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.message)
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Malformed base URL, missing credentials or invalid field values
    Configuration(String),
    /// Non-2xx response from the API
    Api(ApiError),
    /// Unknown resource/operation combination
    UnsupportedOperation {
        /// Requested resource
        resource: String,
        /// Requested operation
        operation: String,
    },
    /// Transport failure before a response was received
    Network(reqwest::Error),
    /// Invalid JSON
    Json(serde_json::Error),
    /// Response that does not have the expected shape
    Deserialization(String),
}

impl AppError {
    /// Shorthand for a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        AppError::Configuration(message.into())
    }

    /// Shorthand for an unsupported operation error
    pub fn unsupported(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        AppError::UnsupportedOperation {
            resource: resource.into(),
            operation: operation.into(),
        }
    }

    /// HTTP status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.status),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::UnsupportedOperation {
                resource,
                operation,
            } => write!(
                f,
                "unsupported operation: \"{operation}\" is not supported for resource \"{resource}\""
            ),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
