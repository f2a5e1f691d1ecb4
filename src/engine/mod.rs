//! List engine module
//!
//! Eager and lazy traversal of paginated collections.
//!
//! # Overview
//!
//! The engine module provides:
//! - `ListEngine::page` - one GET, one [`Page`]
//! - `ListEngine::iterate` - a lazy [`RecordStream`] over every page, with
//!   page fetches spaced by a [`Pacer`]
//!
//! Nothing here knows about specific resources: callers pass the path,
//! the `_embedded` collection key and the query.

mod types;

pub use types::RecordStream;

use crate::error::Result;
use crate::http::{Pacer, Transport};
use crate::pagination::{deserialize_record, Page, PageSource, Transform};
use crate::types::Query;
use futures::stream;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use types::TraversalState;

/// Runs list requests against a [`Transport`]
#[derive(Clone)]
pub struct ListEngine {
    transport: Arc<dyn Transport>,
    values_per_minute: Option<u32>,
}

impl ListEngine {
    /// Create an engine with no default pacing
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            values_per_minute: None,
        }
    }

    /// Pace used by `iterate` when the caller passes `None`
    #[must_use]
    pub fn with_values_per_minute(mut self, values_per_minute: Option<u32>) -> Self {
        self.values_per_minute = values_per_minute;
        self
    }

    /// The default iteration pace
    pub fn values_per_minute(&self) -> Option<u32> {
        self.values_per_minute
    }

    /// Fetch one page of `collection` from `path`
    pub async fn page<T>(&self, path: &str, collection: &str, query: &Query) -> Result<Page<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.page_with(path, collection, query, deserialize_record())
            .await
    }

    /// Fetch one page, converting each record with `transform`
    pub async fn page_with<T>(
        &self,
        path: &str,
        collection: &str,
        query: &Query,
        transform: Transform<T>,
    ) -> Result<Page<T>>
    where
        T: Send + 'static,
    {
        let source = PageSource::new(Arc::clone(&self.transport), collection, transform);
        source.fetch(path.to_string(), query.clone()).await
    }

    /// Lazily walk every page of `collection`, one record at a time.
    ///
    /// `values_per_minute` caps page fetches (not records); `None` falls back
    /// to the engine default and zero disables pacing. A fetch error is the
    /// last item of the stream.
    pub fn iterate<T>(
        &self,
        path: &str,
        collection: &str,
        query: &Query,
        values_per_minute: Option<u32>,
    ) -> RecordStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.iterate_with(path, collection, query, values_per_minute, deserialize_record())
    }

    /// Lazily walk every page, converting each record with `transform`
    pub fn iterate_with<T>(
        &self,
        path: &str,
        collection: &str,
        query: &Query,
        values_per_minute: Option<u32>,
        transform: Transform<T>,
    ) -> RecordStream<T>
    where
        T: Send + 'static,
    {
        let pacer = Pacer::new(values_per_minute.or(self.values_per_minute));
        let source = PageSource::new(Arc::clone(&self.transport), collection, transform);

        debug!(
            "Iterating {} from {} (interval {:?})",
            collection,
            path,
            pacer.interval()
        );

        let initial = TraversalState::Fetch {
            source,
            path: path.to_string(),
            query: query.clone(),
        };

        Box::pin(stream::unfold(
            (initial, pacer),
            |(mut state, pacer)| async move {
                loop {
                    match state {
                        TraversalState::Fetch {
                            source,
                            path,
                            query,
                        } => {
                            pacer.wait().await;
                            match source.fetch(path, query).await {
                                Ok(page) => state = TraversalState::from_page(page),
                                Err(e) => return Some((Err(e), (TraversalState::Done, pacer))),
                            }
                        }
                        TraversalState::Yield {
                            mut items,
                            next,
                            source,
                        } => {
                            if let Some(item) = items.next() {
                                let state = TraversalState::Yield {
                                    items,
                                    next,
                                    source,
                                };
                                return Some((Ok(item), (state, pacer)));
                            }
                            state = match next {
                                Some(href) => TraversalState::Fetch {
                                    source,
                                    path: href,
                                    query: Query::new(),
                                },
                                None => TraversalState::Done,
                            };
                        }
                        TraversalState::Done => return None,
                    }
                }
            },
        ))
    }
}

impl std::fmt::Debug for ListEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEngine")
            .field("values_per_minute", &self.values_per_minute)
            .finish_non_exhaustive()
    }
}
