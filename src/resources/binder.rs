//! Endpoint binders
//!
//! A [`Binder`] ties one [`ResourceDef`] to a record type and a resolved
//! path. Single-record calls go straight to the [`HttpClient`]; list calls
//! go through the [`ListEngine`].

use super::definitions::{Operation, ResourceDef};
use super::models::Profile;
use crate::engine::{ListEngine, RecordStream};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::ids::validate_id;
use crate::pagination::Page;
use crate::types::{JsonValue, Query};
use futures::stream;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Typed access to one endpoint family
pub struct Binder<T> {
    http: Arc<HttpClient>,
    engine: ListEngine,
    def: &'static ResourceDef,
    path: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Binder<T> {
    /// Bind a nested resource under `parent_id`, validating the parent id
    pub(crate) fn new(
        http: Arc<HttpClient>,
        engine: ListEngine,
        def: &'static ResourceDef,
        parent_id: &str,
    ) -> Result<Self> {
        let Some(kind) = def.parent else {
            return Err(Error::config(format!("{} is not a nested resource", def.name)));
        };
        validate_id(parent_id, kind)?;

        Ok(Self {
            http,
            engine,
            path: def.resolve(Some(parent_id)),
            def,
            _record: PhantomData,
        })
    }

    /// Bind a top-level resource, which has no parent to validate
    pub(crate) fn top_level(
        http: Arc<HttpClient>,
        engine: ListEngine,
        def: &'static ResourceDef,
    ) -> Self {
        debug_assert!(def.parent.is_none(), "{} is a nested resource", def.name);
        Self {
            http,
            engine,
            path: def.resolve(None),
            def,
            _record: PhantomData,
        }
    }

    /// The resolved collection path, relative to the API base
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The definition this binder was built from
    pub fn definition(&self) -> &'static ResourceDef {
        self.def
    }

    fn ensure(&self, op: Operation) -> Result<()> {
        if self.def.supports(op) {
            Ok(())
        } else {
            Err(Error::unsupported(self.def.name, op.name()))
        }
    }

    fn item_path(&self, id: &str) -> Result<String> {
        if let Some(kind) = self.def.id_kind {
            validate_id(id, kind)?;
        } else if id.is_empty() || id.contains('/') {
            return Err(Error::invalid_id(self.def.name, id));
        }
        Ok(format!("{}/{}", self.path, id))
    }
}

impl<T> Binder<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Fetch a single record by id
    pub async fn get(&self, id: &str, query: &Query) -> Result<T> {
        self.ensure(Operation::Get)?;
        let path = self.item_path(id)?;
        let body = self.http.get_json(&path, query).await?;
        decode(body)
    }

    /// Fetch one page of the collection
    pub async fn page(&self, query: &Query) -> Result<Page<T>> {
        self.ensure(Operation::Page)?;
        self.engine
            .page(&self.path, self.def.collection, query)
            .await
    }

    /// Lazily walk the whole collection.
    ///
    /// `values_per_minute` paces page fetches; see [`ListEngine::iterate`].
    pub fn iterate(&self, query: &Query, values_per_minute: Option<u32>) -> RecordStream<T> {
        if let Err(e) = self.ensure(Operation::Iterate) {
            return Box::pin(stream::once(async move { Err(e) }));
        }
        self.engine
            .iterate(&self.path, self.def.collection, query, values_per_minute)
    }

    /// Create a record from a JSON body
    pub async fn create(&self, body: JsonValue) -> Result<T> {
        self.ensure(Operation::Create)?;
        debug!("Creating {}", self.def.name);
        let response = self.http.post_json(&self.path, body).await?;
        decode(response)
    }

    /// Patch fields of an existing record
    pub async fn update(&self, id: &str, body: JsonValue) -> Result<T> {
        self.ensure(Operation::Update)?;
        let path = self.item_path(id)?;
        let response = self.http.patch_json(&path, body).await?;
        decode(response)
    }

    /// Cancel or delete a record.
    ///
    /// Returns the updated record, or `None` when the API answers with no content.
    pub async fn cancel(&self, id: &str) -> Result<Option<T>> {
        self.ensure(Operation::Cancel)?;
        let path = self.item_path(id)?;
        match self.http.delete_json(&path, &Query::new()).await? {
            JsonValue::Null => Ok(None),
            body => decode(body).map(Some),
        }
    }
}

impl Binder<Profile> {
    /// The profile the current credentials belong to
    pub async fn current(&self) -> Result<Profile> {
        self.ensure(Operation::Get)?;
        let body = self
            .http
            .get_json(&format!("{}/me", self.path), &Query::new())
            .await?;
        decode(body)
    }
}

impl<T> Clone for Binder<T> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            engine: self.engine.clone(),
            def: self.def,
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Binder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("resource", &self.def.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(body: JsonValue) -> Result<T> {
    serde_json::from_value(body).map_err(|e| Error::malformed(format!("unexpected record shape: {e}")))
}
