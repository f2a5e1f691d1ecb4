//! The GET capability the list engine is built on

use crate::error::Result;
use crate::types::{JsonValue, Query};
use async_trait::async_trait;

/// Performs a GET and returns the parsed JSON body.
///
/// `path` is either relative to the API base URL or an absolute href taken
/// from a HAL link. Non-2xx statuses and transport failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str, query: &Query) -> Result<JsonValue>;
}
