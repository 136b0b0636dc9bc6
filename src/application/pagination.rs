/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Pagination drivers for list endpoints
//!
//! Two independent loops sit on top of [`ChatwootApi`]:
//!
//! - [`request_all_items`] walks page numbers (`?page=1,2,...`) until the response
//!   metadata or a short page says there is nothing left.
//! - [`request_all_messages`] walks a conversation's history newest-first using the
//!   id of the oldest message seen so far as the `before` cursor.
//!
//! Both issue one request at a time and keep their state on the stack.

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_MESSAGES, MAX_PAGES, MESSAGES_PAGE_SIZE};
use crate::error::ChatwootResult;
use crate::model::http::ChatwootApi;
use crate::model::requests::ApiScope;
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Extracts the items of a list response
///
/// Checks, in order: the named property, `data`, and the response itself. The
/// first one that is an array wins; otherwise the list is empty.
pub fn extract_items(response: &Value, property: &str) -> Vec<Value> {
    if let Some(Value::Array(items)) = response.get(property) {
        return items.clone();
    }
    if let Some(Value::Array(items)) = response.get("data") {
        return items.clone();
    }
    if let Value::Array(items) = response {
        return items.clone();
    }
    Vec::new()
}

/// Extracts the messages of a messages response (`payload`, or a raw array)
pub fn extract_messages(response: &Value) -> Vec<Value> {
    match response.get("payload") {
        Some(Value::Array(items)) => items.clone(),
        _ => match response {
            Value::Array(items) => items.clone(),
            _ => Vec::new(),
        },
    }
}

/// Whether the response metadata marks the last page
///
/// `meta.current_page >= meta.total_pages`. Both numbers and numeric strings are
/// accepted; a missing `current_page` falls back to the page that was requested.
pub fn is_last_page(response: &Value, requested_page: u32) -> bool {
    let Some(meta) = response.get("meta") else {
        return false;
    };
    let Some(total_pages) = meta.get("total_pages").and_then(as_page_number) else {
        return false;
    };
    let current_page = meta
        .get("current_page")
        .and_then(as_page_number)
        .unwrap_or(u64::from(requested_page));
    current_page >= total_pages
}

fn as_page_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Fetches every page of a page-number paginated endpoint
///
/// # Arguments
/// * `client` - Request executor
/// * `method` - HTTP method, usually GET
/// * `endpoint` - Account-scoped endpoint path
/// * `body` - Optional body sent with every page request
/// * `query` - Query parameters; `page` is overwritten on each iteration
/// * `property` - Response property holding the items (usually `payload`)
///
/// # Returns
/// * `Ok(Vec<Value>)` - Items of all pages, in order
/// * `Err(AppError)` - The first error of any page request
///
/// The loop stops when the metadata marks the last page, when a page is shorter
/// than the default page size, after page 100, or on an empty page.
pub async fn request_all_items<C: ChatwootApi + ?Sized>(
    client: &C,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
    query: Option<&Map<String, Value>>,
    property: &str,
) -> ChatwootResult<Vec<Value>> {
    request_all_items_scoped(client, ApiScope::Account, method, endpoint, body, query, property)
        .await
}

/// Same as [`request_all_items`] for an endpoint of any scope
pub async fn request_all_items_scoped<C: ChatwootApi + ?Sized>(
    client: &C,
    scope: ApiScope,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
    query: Option<&Map<String, Value>>,
    property: &str,
) -> ChatwootResult<Vec<Value>> {
    let mut query = query.cloned().unwrap_or_default();
    let mut all_items = Vec::new();
    let mut page: u32 = 1;

    loop {
        query.insert("page".to_string(), Value::from(page));
        debug!("Getting {} page {}", endpoint, page);

        let response = client
            .request_scoped(scope, method.clone(), endpoint, body, Some(&query))
            .await?;

        let items = extract_items(&response, property);
        let count = items.len();
        all_items.extend(items);
        let requested_page = page;
        page += 1;

        if is_last_page(&response, requested_page) {
            break;
        }
        if count < DEFAULT_PAGE_SIZE {
            break;
        }
        if page > MAX_PAGES {
            info!(
                "Stopping pagination of {} after {} pages",
                endpoint, MAX_PAGES
            );
            break;
        }
        if count == 0 {
            break;
        }
    }

    debug!("Total items obtained from {}: {}", endpoint, all_items.len());
    Ok(all_items)
}

/// Fetches the messages of a conversation, newest first, following the `before` cursor
///
/// # Arguments
/// * `client` - Request executor
/// * `conversation_id` - Conversation whose messages are listed
/// * `limit` - Optional maximum number of messages
///
/// # Returns
/// * `Ok(Vec<Value>)` - Messages in the order the API returned them, page after page
/// * `Err(AppError)` - The first error of any request; nothing partial is returned
pub async fn request_all_messages<C: ChatwootApi + ?Sized>(
    client: &C,
    conversation_id: u64,
    limit: Option<usize>,
) -> ChatwootResult<Vec<Value>> {
    let endpoint = format!("/conversations/{conversation_id}/messages");
    let mut all_messages: Vec<Value> = Vec::new();
    let mut before: Option<Value> = None;

    loop {
        let mut query = Map::new();
        if let Some(cursor) = &before {
            query.insert("before".to_string(), cursor.clone());
        }
        debug!(
            "Getting messages of conversation {} before {:?}",
            conversation_id, before
        );

        let response = client
            .request(Method::GET, &endpoint, None, Some(&query))
            .await?;

        let messages = extract_messages(&response);
        if messages.is_empty() {
            break;
        }

        let count = messages.len();
        before = messages
            .last()
            .and_then(|m| m.get("id"))
            .filter(|id| !id.is_null())
            .cloned();
        all_messages.extend(messages);

        if let Some(limit) = limit
            && all_messages.len() >= limit
        {
            all_messages.truncate(limit);
            return Ok(all_messages);
        }

        if count < MESSAGES_PAGE_SIZE {
            break;
        }
        if all_messages.len() > MAX_MESSAGES {
            info!(
                "Stopping message pagination of conversation {} after {} messages",
                conversation_id,
                all_messages.len()
            );
            break;
        }
        // Without an id on the oldest message there is no way to ask for older ones
        if before.is_none() {
            break;
        }
    }

    debug!(
        "Total messages obtained for conversation {}: {}",
        conversation_id,
        all_messages.len()
    );
    Ok(all_messages)
}
