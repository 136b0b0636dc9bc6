/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_ITEMS_PROPERTY;
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// API surface a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiScope {
    /// `{base}/api/v1/accounts/{account_id}`, authenticated with the user token
    #[default]
    Account,
    /// `{base}/platform/api/v1`, authenticated with the platform token
    Platform,
    /// `{base}/public/api/v1/inboxes/{inbox_identifier}`, no token
    Public,
}

impl fmt::Display for ApiScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiScope::Account => write!(f, "account"),
            ApiScope::Platform => write!(f, "platform"),
            ApiScope::Public => write!(f, "public"),
        }
    }
}

/// How the response of a request is turned into output items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMode {
    /// One request, the response is returned as is
    Single,
    /// One request against a list endpoint, items are extracted from `property`
    List {
        /// Property holding the item list
        property: &'static str,
        /// Maximum number of items to return
        limit: Option<usize>,
    },
    /// Every page of a list endpoint through the page-number driver
    AllPages {
        /// Property holding the item list
        property: &'static str,
        /// Maximum number of items to return
        limit: Option<usize>,
    },
    /// Message history of a conversation through the before-id cursor driver
    Messages {
        /// Conversation whose messages are listed
        conversation_id: u64,
        /// Maximum number of messages to return
        limit: Option<usize>,
    },
}

impl ResponseMode {
    /// Single page of a list endpoint nesting items under `payload`
    pub fn list(limit: Option<usize>) -> Self {
        ResponseMode::List {
            property: DEFAULT_ITEMS_PROPERTY,
            limit,
        }
    }

    /// All pages of a list endpoint nesting items under `payload`
    pub fn all_pages(limit: Option<usize>) -> Self {
        ResponseMode::AllPages {
            property: DEFAULT_ITEMS_PROPERTY,
            limit,
        }
    }
}

/// Everything needed to perform one operation, independent of the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// API surface
    pub scope: ApiScope,
    /// HTTP method
    pub method: Method,
    /// Path relative to the scope root, e.g. `/contacts/5`
    pub endpoint: String,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Query parameters
    pub query: Map<String, Value>,
    /// How the response is turned into items
    pub mode: ResponseMode,
    /// Wrapper property stripped from the response before it is used
    pub unwrap: Option<&'static str>,
}

impl RequestDescriptor {
    /// Creates an account-scoped, single-response descriptor
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            scope: ApiScope::Account,
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Map::new(),
            mode: ResponseMode::Single,
            unwrap: None,
        }
    }

    /// GET descriptor
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// POST descriptor
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// PUT descriptor
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// PATCH descriptor
    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    /// DELETE descriptor
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Set the API scope
    pub fn with_scope(mut self, scope: ApiScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(Value::Object(body));
        self
    }

    /// Add one query parameter; null values are skipped
    pub fn with_query(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.query.insert(key.to_string(), value);
        }
        self
    }

    /// Merge query parameters; null values are skipped
    pub fn with_query_map(mut self, query: Map<String, Value>) -> Self {
        for (key, value) in query {
            if !value.is_null() {
                self.query.insert(key, value);
            }
        }
        self
    }

    /// Set the response mode
    pub fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Strip a wrapper property from the response
    pub fn with_unwrap(mut self, property: &'static str) -> Self {
        self.unwrap = Some(property);
        self
    }
}

/// One unit of work handed over by the host
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowItem {
    /// Resource name, e.g. `contact`
    pub resource: String,
    /// Operation name, e.g. `getAll`
    pub operation: String,
    /// Resolved parameter values
    #[serde(default)]
    pub params: Value,
}

impl WorkflowItem {
    /// Creates a new workflow item
    pub fn new(resource: impl Into<String>, operation: impl Into<String>, params: Value) -> Self {
        Self {
            resource: resource.into(),
            operation: operation.into(),
            params,
        }
    }
}
