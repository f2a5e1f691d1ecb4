//! Engine types
//!
//! The record stream type and the traversal state machine behind `iterate`.

use crate::error::Result;
use crate::pagination::{Page, PageSource};
use crate::types::Query;
use futures::Stream;
use std::pin::Pin;

/// Lazy, page-spanning sequence of records returned by `iterate`
pub type RecordStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Where a traversal stands between polls
pub(crate) enum TraversalState<T> {
    /// About to fetch `path`
    Fetch {
        source: PageSource<T>,
        path: String,
        query: Query,
    },
    /// Handing out the records of the current page
    Yield {
        items: std::vec::IntoIter<T>,
        next: Option<String>,
        source: PageSource<T>,
    },
    /// Exhausted or errored
    Done,
}

impl<T> TraversalState<T> {
    pub(crate) fn from_page(page: Page<T>) -> Self {
        let (items, next, source) = page.into_traversal();
        Self::Yield {
            items: items.into_iter(),
            next,
            source,
        }
    }
}
