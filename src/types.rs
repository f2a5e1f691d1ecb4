//! Common types used throughout the client
//!
//! Shared type aliases and small value types used across modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Query parameters for a request.
///
/// Ordered so that the encoded query string is deterministic.
pub type Query = BTreeMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PATCH,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// API Mode
// ============================================================================

/// Whether a resource was created with a test or a live key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Live,
}

// ============================================================================
// Query helpers
// ============================================================================

/// Build a [`Query`] from key/value pairs
///
/// ```
/// use mollie_client::types::query;
///
/// let q = query([("limit", "3"), ("from", "tr_abc")]);
/// assert_eq!(q.get("limit").map(String::as_str), Some("3"));
/// ```
pub fn query<K, V, I>(pairs: I) -> Query
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
