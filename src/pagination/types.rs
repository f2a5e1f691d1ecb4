//! HAL links and the page container
//!
//! A [`Page`] is built once per list response and never mutated. It keeps
//! the transport, collection key and record transform it was fetched with,
//! so following a link re-wraps the next response the same way.

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, Query};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Links
// ============================================================================

/// A single HAL link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Media type of the target, e.g. `application/hal+json`
    #[serde(rename = "type", default)]
    pub media_type: String,
}

impl Link {
    /// Create a link
    pub fn new(href: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: media_type.into(),
        }
    }
}

/// The `_links` object of a list response or resource.
///
/// `next`/`previous` are `None` exactly when there is no page in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub previous: Option<Link>,
    #[serde(default)]
    pub documentation: Option<Link>,
    /// Any other relation (`checkout`, `dashboard`, `customer`, ...)
    #[serde(flatten)]
    pub other: BTreeMap<String, Option<Link>>,
}

impl Links {
    /// Look up a relation by name
    pub fn get(&self, rel: &str) -> Option<&Link> {
        match rel {
            "self" => self.self_link.as_ref(),
            "next" => self.next.as_ref(),
            "previous" => self.previous.as_ref(),
            "documentation" => self.documentation.as_ref(),
            other => self.other.get(other).and_then(Option::as_ref),
        }
    }

    /// The href of a relation, if present
    pub fn href(&self, rel: &str) -> Option<&str> {
        self.get(rel).map(|link| link.href.as_str())
    }
}

// ============================================================================
// Record transforms
// ============================================================================

/// Turns one raw embedded JSON record into the caller's record type
pub type Transform<T> = Arc<dyn Fn(JsonValue) -> Result<T> + Send + Sync>;

/// The default transform: plain serde deserialization
pub fn deserialize_record<T: DeserializeOwned>() -> Transform<T> {
    Arc::new(|raw: JsonValue| {
        serde_json::from_value(raw)
            .map_err(|e| Error::malformed(format!("record does not match its model: {e}")))
    })
}

// ============================================================================
// Page source
// ============================================================================

/// Everything needed to fetch and wrap a page, minus the URL
pub(crate) struct PageSource<T> {
    transport: Arc<dyn Transport>,
    collection: Arc<str>,
    transform: Transform<T>,
}

impl<T> Clone for PageSource<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            collection: Arc::clone(&self.collection),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<T> PageSource<T> {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        collection: impl Into<Arc<str>>,
        transform: Transform<T>,
    ) -> Self {
        Self {
            transport,
            collection: collection.into(),
            transform,
        }
    }

    /// GET `path` and wrap the body as a page
    pub(crate) async fn fetch(self, path: String, query: Query) -> Result<Page<T>> {
        debug!("Fetching {} page: {}", self.collection, path);
        let body = self.transport.get_json(&path, &query).await?;
        Page::from_response(body, self)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of records plus its navigation links
pub struct Page<T> {
    items: Vec<T>,
    links: Links,
    count: usize,
    source: PageSource<T>,
}

impl<T> Page<T> {
    /// Build a page from a list response body.
    ///
    /// Expects `_embedded[collection]` to be an array, `_links` (or `links`)
    /// to be an object and `count` to equal the array length.
    pub(crate) fn from_response(body: JsonValue, source: PageSource<T>) -> Result<Self> {
        let JsonValue::Object(mut body) = body else {
            return Err(Error::malformed("list response is not a JSON object"));
        };

        let collection = &*source.collection;

        let raw_items = match body
            .get_mut("_embedded")
            .and_then(|embedded| embedded.get_mut(collection))
            .map(JsonValue::take)
        {
            Some(JsonValue::Array(items)) => items,
            Some(_) => {
                return Err(Error::malformed(format!(
                    "_embedded.{collection} is not an array"
                )))
            }
            None => {
                return Err(Error::malformed(format!(
                    "missing _embedded.{collection}"
                )))
            }
        };

        let raw_links = body
            .remove("_links")
            .or_else(|| body.remove("links"))
            .ok_or_else(|| Error::malformed("missing _links"))?;
        let links: Links = serde_json::from_value(raw_links)
            .map_err(|e| Error::malformed(format!("invalid _links: {e}")))?;

        let count = body
            .get("count")
            .and_then(JsonValue::as_u64)
            .ok_or_else(|| Error::malformed("missing count"))? as usize;

        if count != raw_items.len() {
            return Err(Error::malformed(format!(
                "count is {count} but _embedded.{collection} holds {} records",
                raw_items.len()
            )));
        }

        let items = raw_items
            .into_iter()
            .map(|raw| (source.transform)(raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            links,
            count,
            source,
        })
    }

    /// Records in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, keeping only its records
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Navigation links
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Declared number of records on this page
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the records of this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether a next page exists
    pub fn has_next_page(&self) -> bool {
        self.links.next.is_some()
    }

    /// Whether a previous page exists
    pub fn has_previous_page(&self) -> bool {
        self.links.previous.is_some()
    }

    /// Split into records, the next href and the fetch context
    pub(crate) fn into_traversal(self) -> (Vec<T>, Option<String>, PageSource<T>) {
        let next = self.links.next.map(|link| link.href);
        (self.items, next, self.source)
    }
}

impl<T: Send + 'static> Page<T> {
    /// Fetch the next page.
    ///
    /// `None` when this is the last page.
    pub fn next_page(&self) -> Option<impl Future<Output = Result<Page<T>>> + Send + 'static> {
        self.follow_link(self.links.next.as_ref())
    }

    /// Fetch the previous page.
    ///
    /// `None` when this is the first page.
    pub fn previous_page(
        &self,
    ) -> Option<impl Future<Output = Result<Page<T>>> + Send + 'static> {
        self.follow_link(self.links.previous.as_ref())
    }

    /// Fetch the page behind any relation.
    ///
    /// Fails with [`Error::NoSuchLink`] when the relation is null or absent.
    pub fn follow(
        &self,
        rel: &str,
    ) -> Result<impl Future<Output = Result<Page<T>>> + Send + 'static> {
        self.follow_link(self.links.get(rel))
            .ok_or_else(|| Error::no_such_link(rel))
    }

    fn follow_link(
        &self,
        link: Option<&Link>,
    ) -> Option<impl Future<Output = Result<Page<T>>> + Send + 'static> {
        let href = link?.href.clone();
        let source = self.source.clone();
        Some(source.fetch(href, Query::new()))
    }
}

impl<T> std::ops::Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("collection", &&*self.source.collection)
            .field("count", &self.count)
            .field("items", &self.items)
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
