//! HTTP client for the Mollie API
//!
//! Handles:
//! - Joining relative resource paths onto the configured base URL
//! - Passing absolute HAL link hrefs through untouched
//! - Default headers (API key, user agent)
//! - Mapping non-2xx responses to [`Error::Api`] / [`Error::HttpStatus`]
//!
//! Requests are sent exactly once. Timeouts come from reqwest.

use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method, Query};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, warn};
use url::Url;

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: Query,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge a whole set of query parameters
    #[must_use]
    pub fn with_query(mut self, query: &Query) -> Self {
        self.query
            .extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the `Idempotency-Key` header used by Mollie for safe POST replays
    #[must_use]
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header("Idempotency-Key", key)
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client bound to one base URL and credential
pub struct HttpClient {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl HttpClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut default_headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
            default_headers.insert(name, value);
        }
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| Error::config(format!("invalid API key: {e}")))?;
            value.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// The base URL relative paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json(&self, path: &str, query: &Query) -> Result<JsonValue> {
        self.request(Method::GET, path, RequestConfig::new().with_query(query))
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: JsonValue) -> Result<JsonValue> {
        self.request(Method::POST, path, RequestConfig::new().json(body))
            .await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch_json(&self, path: &str, body: JsonValue) -> Result<JsonValue> {
        self.request(Method::PATCH, path, RequestConfig::new().json(body))
            .await
    }

    /// Make a DELETE request
    ///
    /// Mollie answers some deletes with `204 No Content`, which yields `JsonValue::Null`.
    pub async fn delete_json(&self, path: &str, query: &Query) -> Result<JsonValue> {
        self.request(Method::DELETE, path, RequestConfig::new().with_query(query))
            .await
    }

    /// Make a generic request
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<JsonValue> {
        let url = self.build_url(path, &config.query)?;
        debug!("{:?} {}", method, url);

        let mut req = self
            .client
            .request(method.into(), url.clone())
            .headers(self.default_headers.clone());

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{:?} {} failed with {}", method, url, status.as_u16());
            return Err(Error::from_response_body(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("response from {url} is not valid JSON: {e}")))
    }

    /// Build full URL from path and query
    ///
    /// Absolute URLs (HAL link hrefs) are used as-is when they share the
    /// base URL's origin; any other origin is refused so the API key never
    /// leaves the configured host. Extra query parameters are appended to
    /// whatever query the URL already carries.
    pub fn build_url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            let url = Url::parse(path)?;
            if url.origin() != self.base_url.origin() {
                warn!("Refusing link to foreign origin {}", url.origin().ascii_serialization());
                return Err(Error::malformed(format!(
                    "link {path} points outside {}",
                    self.base_url.origin().ascii_serialization()
                )));
            }
            url
        } else if self.base_url.path() != "/" && path.starts_with(self.base_url.path()) {
            // Root-relative href that already carries the base path
            self.base_url.join(path)?
        } else {
            self.base_url.join(path.trim_start_matches('/'))?
        };

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, path: &str, query: &Query) -> Result<JsonValue> {
        HttpClient::get_json(self, path, query).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.default_headers.contains_key(AUTHORIZATION))
            .finish_non_exhaustive()
    }
}
