//! Scripted transport for unit tests

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, Query};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

/// A recorded GET
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub path: String,
    pub query: Query,
    pub at: Instant,
}

/// Answers GETs from a fixed path → response table
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: HashMap<String, std::result::Result<JsonValue, u16>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: impl Into<String>, body: JsonValue) -> Self {
        self.responses.insert(path.into(), Ok(body));
        self
    }

    pub fn fail(mut self, path: impl Into<String>, status: u16) -> Self {
        self.responses.insert(path.into(), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, path: &str, query: &Query) -> Result<JsonValue> {
        self.calls.lock().unwrap().push(Call {
            path: path.to_string(),
            query: query.clone(),
            at: Instant::now(),
        });

        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(Error::http_status(*status, "scripted failure")),
            None => Err(Error::http_status(404, format!("no script for {path}"))),
        }
    }
}

/// A list body with `ids` embedded under `collection`
pub(crate) fn list_body(
    collection: &str,
    ids: &[&str],
    next: Option<&str>,
    previous: Option<&str>,
) -> JsonValue {
    let link = |href: Option<&str>| {
        href.map_or(JsonValue::Null, |h| {
            json!({"href": h, "type": "application/hal+json"})
        })
    };
    let records: Vec<JsonValue> = ids.iter().map(|id| json!({ "id": id })).collect();

    json!({
        "_embedded": { collection: records },
        "count": ids.len(),
        "_links": {
            "self": {"href": format!("https://api.mollie.com/v2/{collection}"), "type": "application/hal+json"},
            "documentation": {"href": "https://docs.mollie.com/reference/v2/payments-api/list-payments", "type": "text/html"},
            "next": link(next),
            "previous": link(previous),
        }
    })
}
