/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::operations::build_request;
use crate::application::pagination::{
    extract_items, request_all_items_scoped, request_all_messages,
};
use crate::error::{AppError, ChatwootResult};
use crate::model::http::{ChatwootApi, HttpClient};
use crate::model::params::Params;
use crate::model::requests::{RequestDescriptor, ResponseMode, WorkflowItem};
use crate::model::utils::simplify_response;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Executes operations against the Chatwoot API and turns responses into output items
#[derive(Clone)]
pub struct Client {
    api: Arc<dyn ChatwootApi>,
}

impl Client {
    /// Creates a client backed by the HTTP executor
    ///
    /// # Arguments
    /// * `config` - Credentials and transport settings
    pub fn new(config: Config) -> ChatwootResult<Self> {
        Ok(Self::with_api(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client on top of any request executor
    pub fn with_api(api: Arc<dyn ChatwootApi>) -> Self {
        Self { api }
    }

    /// The underlying request executor
    pub fn api(&self) -> Arc<dyn ChatwootApi> {
        self.api.clone()
    }

    /// Executes one `(resource, operation)` pair
    ///
    /// # Arguments
    /// * `resource` - Resource name, e.g. `contact`
    /// * `operation` - Operation name, e.g. `getAll`
    /// * `params` - Parameter object resolved by the host
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - Output items; array responses are split into one item per element
    /// * `Err(AppError)` - Unsupported pair, invalid parameters or a failed request
    ///
    /// A `simplify` parameter holding a field list projects every item onto those fields.
    pub async fn execute(
        &self,
        resource: &str,
        operation: &str,
        params: &Value,
    ) -> ChatwootResult<Vec<Value>> {
        let params = Params::from(params);
        let descriptor = build_request(resource, operation, &params)?;
        info!("Executing {} {}", resource, operation);

        let items = self.execute_descriptor(&descriptor).await?;
        let fields = params.string_list("simplify");
        if fields.is_empty() {
            Ok(items)
        } else {
            Ok(simplify_response(&items, &fields))
        }
    }

    /// Performs the request(s) a descriptor describes
    pub async fn execute_descriptor(
        &self,
        descriptor: &RequestDescriptor,
    ) -> ChatwootResult<Vec<Value>> {
        let body = descriptor.body.as_ref();
        let query = (!descriptor.query.is_empty()).then_some(&descriptor.query);

        let items = match &descriptor.mode {
            ResponseMode::AllPages { property, limit } => {
                let items = request_all_items_scoped(
                    self.api.as_ref(),
                    descriptor.scope,
                    descriptor.method.clone(),
                    &descriptor.endpoint,
                    body,
                    query,
                    property,
                )
                .await?;
                truncate(items, *limit)
            }
            ResponseMode::Messages {
                conversation_id,
                limit,
            } => request_all_messages(self.api.as_ref(), *conversation_id, *limit).await?,
            ResponseMode::Single | ResponseMode::List { .. } => {
                let response = self
                    .api
                    .request_scoped(
                        descriptor.scope,
                        descriptor.method.clone(),
                        &descriptor.endpoint,
                        body,
                        query,
                    )
                    .await?;
                let response = unwrap_response(response, descriptor.unwrap);
                match &descriptor.mode {
                    ResponseMode::List { property, limit } => {
                        truncate(extract_items(&response, property), *limit)
                    }
                    _ => into_items(response),
                }
            }
        };

        debug!("{} item(s) from {}", items.len(), descriptor.endpoint);
        Ok(items)
    }

    /// Executes workflow items one after another
    ///
    /// # Arguments
    /// * `items` - Work handed over by the host
    /// * `continue_on_fail` - When set, a failing item yields `{"error", "status"?}` and the
    ///   batch goes on; otherwise the first error is returned
    pub async fn run_items(
        &self,
        items: &[WorkflowItem],
        continue_on_fail: bool,
    ) -> ChatwootResult<Vec<Value>> {
        let mut output = Vec::new();
        for item in items {
            match self
                .execute(&item.resource, &item.operation, &item.params)
                .await
            {
                Ok(values) => output.extend(values),
                Err(e) if continue_on_fail => {
                    warn!("{} {} failed: {}", item.resource, item.operation, e);
                    output.push(error_item(&e));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(output)
    }
}

/// Output item describing a failed workflow item
pub fn error_item(error: &AppError) -> Value {
    let mut item = Map::new();
    item.insert("error".to_string(), Value::from(error.to_string()));
    if let Some(status) = error.status() {
        item.insert("status".to_string(), Value::from(status));
    }
    Value::Object(item)
}

fn unwrap_response(response: Value, property: Option<&str>) -> Value {
    match (property, response) {
        (Some(property), Value::Object(mut object)) if object.contains_key(property) => {
            object.remove(property).unwrap_or(Value::Null)
        }
        (_, response) => response,
    }
}

fn into_items(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn truncate(mut items: Vec<Value>, limit: Option<usize>) -> Vec<Value> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
