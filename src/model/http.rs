/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{
    ACCESS_TOKEN_HEADER, ACCOUNT_API_PATH, PLATFORM_API_PATH, PUBLIC_API_PATH, USER_AGENT,
};
use crate::error::{ApiError, AppError, ChatwootResult};
use crate::model::requests::ApiScope;
use crate::model::utils::validate_path_segment;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, Method, Response};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Explanations for the status codes the API is known to return
static STATUS_MESSAGES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            400,
            "Bad Request - The request was invalid or cannot be served",
        ),
        (
            401,
            "Unauthorized - The API access token is missing or invalid",
        ),
        (
            403,
            "Forbidden - The token does not have permission to access this resource",
        ),
        (404, "Not Found - The requested resource does not exist"),
        (
            422,
            "Unprocessable Entity - The request parameters failed validation",
        ),
        (
            429,
            "Too Many Requests - Rate limit exceeded, try again later",
        ),
        (
            500,
            "Internal Server Error - The Chatwoot server encountered an error",
        ),
        (
            502,
            "Bad Gateway - The Chatwoot server is unreachable behind its proxy",
        ),
        (
            503,
            "Service Unavailable - The Chatwoot server is temporarily unavailable",
        ),
    ])
});

/// Human-readable explanation for a status code, if it is one of the known ones
pub fn status_message(status: u16) -> Option<&'static str> {
    STATUS_MESSAGES.get(&status).copied()
}

/// Normalizes a base URL
///
/// Whitespace is trimmed and every trailing `/` removed. The result must start
/// with `http://` or `https://`.
///
/// # Returns
/// * `Ok(String)` - Normalized URL
/// * `Err(AppError::Configuration)` - If the scheme is missing or unsupported
pub fn normalize_base_url(raw: &str) -> ChatwootResult<String> {
    let normalized = raw.trim().trim_end_matches('/');
    if normalized.starts_with("http://") || normalized.starts_with("https://") {
        Ok(normalized.to_string())
    } else {
        Err(AppError::configuration(format!(
            "invalid base URL \"{raw}\": it must start with http:// or https://"
        )))
    }
}

/// Body actually sent for a request
///
/// GET and DELETE never carry a body, and an empty object is not sent at all.
pub fn prepare_body<'a>(method: &Method, body: Option<&'a Value>) -> Option<&'a Value> {
    if *method == Method::GET || *method == Method::DELETE {
        return None;
    }
    match body {
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(Value::Null) | None => None,
        Some(other) => Some(other),
    }
}

/// Query pairs actually sent for a request
///
/// An empty map yields `None` so that no query string is appended. Arrays are
/// encoded as repeated `key[]` pairs and null entries are skipped.
pub fn prepare_query(query: Option<&Map<String, Value>>) -> Option<Vec<(String, String)>> {
    let query = query.filter(|q| !q.is_empty())?;
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                for item in items {
                    if let Some(item) = query_value(item) {
                        pairs.push((array_key.clone(), item));
                    }
                }
            }
            other => {
                if let Some(item) = query_value(other) {
                    pairs.push((key.clone(), item));
                }
            }
        }
    }
    Some(pairs)
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Request executor seam used by the pagination drivers and the client
#[async_trait]
pub trait ChatwootApi: Send + Sync {
    /// Performs one call against the given scope and returns the parsed JSON response
    ///
    /// # Arguments
    /// * `scope` - API surface the endpoint belongs to
    /// * `method` - HTTP method
    /// * `endpoint` - Path relative to the scope root (e.g. `/contacts`)
    /// * `body` - Optional JSON body
    /// * `query` - Optional query parameters
    async fn request_scoped(
        &self,
        scope: ApiScope,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        query: Option<&Map<String, Value>>,
    ) -> ChatwootResult<Value>;

    /// Performs one account-scoped call
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        query: Option<&Map<String, Value>>,
    ) -> ChatwootResult<Value> {
        self.request_scoped(ApiScope::Account, method, endpoint, body, query)
            .await
    }
}

/// HTTP client for the Chatwoot API
///
/// Credentials are read from the shared configuration on every call, the base URL
/// is normalized per call and no retries are performed.
pub struct HttpClient {
    config: Arc<Config>,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and transport settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying transport cannot be built
    pub fn new(config: Config) -> ChatwootResult<Self> {
        Self::from_arc(Arc::new(config))
    }

    /// Creates a new HTTP client sharing an existing configuration
    pub fn from_arc(config: Arc<Config>) -> ChatwootResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http_client = builder.build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Full URL of an endpoint within a scope
    pub fn url_for(&self, scope: ApiScope, endpoint: &str) -> ChatwootResult<String> {
        let credentials = &self.config.credentials;
        let base_url = normalize_base_url(&credentials.base_url)?;
        let endpoint = if endpoint.is_empty() || endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{endpoint}")
        };

        let url = match scope {
            ApiScope::Account => format!(
                "{base_url}{ACCOUNT_API_PATH}/{}{endpoint}",
                credentials.require_account_id()?
            ),
            ApiScope::Platform => format!("{base_url}{PLATFORM_API_PATH}{endpoint}"),
            ApiScope::Public => format!(
                "{base_url}{PUBLIC_API_PATH}/{}{endpoint}",
                validate_path_segment(
                    &Value::from(credentials.require_inbox_identifier()?),
                    "inbox identifier"
                )?
            ),
        };
        Ok(url)
    }

    /// Headers sent for a scope
    fn headers_for(&self, scope: ApiScope) -> ChatwootResult<Vec<(&'static str, String)>> {
        let credentials = &self.config.credentials;
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        match scope {
            ApiScope::Account => headers.push((
                ACCESS_TOKEN_HEADER,
                credentials.require_api_access_token()?.to_string(),
            )),
            ApiScope::Platform => headers.push((
                ACCESS_TOKEN_HEADER,
                credentials.require_platform_token()?.to_string(),
            )),
            ApiScope::Public => {}
        }
        Ok(headers)
    }
}

#[async_trait]
impl ChatwootApi for HttpClient {
    async fn request_scoped(
        &self,
        scope: ApiScope,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        query: Option<&Map<String, Value>>,
    ) -> ChatwootResult<Value> {
        let url = self.url_for(scope, endpoint)?;
        let headers = self.headers_for(scope)?;
        let headers: Vec<(&str, &str)> = headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let query = prepare_query(query);

        let response = make_http_request(
            &self.http_client,
            method,
            &url,
            endpoint,
            headers,
            body,
            query.as_deref(),
        )
        .await?;

        parse_response(response).await
    }
}

/// Makes one HTTP request and maps failure status codes to [`ApiError`]
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `endpoint` - Endpoint path used in the error description
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional body, dropped for GET/DELETE and when it is an empty object
/// * `query` - Optional query pairs; `None` appends no query string at all
///
/// # Returns
///
/// * `Ok(Response)` - Successful (2xx) HTTP response
/// * `Err(AppError::Api)` - Non-2xx response with a resolved message
/// * `Err(AppError::Network)` - Transport failure
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    endpoint: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&Value>,
    query: Option<&[(String, String)]>,
) -> ChatwootResult<Response> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(pairs) = query {
        request = request.query(pairs);
    }

    if let Some(b) = prepare_body(&method, body) {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let transport_message = match response.error_for_status_ref() {
        Err(e) => e.to_string(),
        Ok(_) => status.to_string(),
    };
    let body_text = response.text().await.unwrap_or_default();
    error!(
        "{} {} failed with status {}: {}",
        method, endpoint, status, body_text
    );

    let message = status_message(status.as_u16())
        .map(str::to_string)
        .unwrap_or(transport_message);

    Err(AppError::Api(ApiError::new(
        message,
        format!("Failed to {method} {endpoint}"),
        status.as_u16(),
    )))
}

/// Parses a successful response body as JSON
///
/// Some endpoints (mostly deletions) answer with an empty body, which is reported
/// as `{"success": true}`.
async fn parse_response(response: Response) -> ChatwootResult<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(json!({ "success": true }));
    }
    Ok(serde_json::from_str(&text)?)
}
