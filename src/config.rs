//! Client configuration
//!
//! `ClientConfig` can be assembled with a builder, read from a YAML
//! document, or picked up from the environment.
//!
//! ```yaml
//! api_key: test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM
//! base_url: https://api.mollie.com/v2/
//! timeout_secs: 30
//! values_per_minute: 60
//! default_headers:
//!   X-Request-Source: back-office
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.mollie.com/v2/";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "MOLLIE_API_KEY";

/// Environment variable overriding the base URL
pub const ENV_API_URL: &str = "MOLLIE_API_URL";

/// Environment variable with the default iteration pace
pub const ENV_VALUES_PER_MINUTE: &str = "MOLLIE_VALUES_PER_MINUTE";

static API_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(live|test)_\w+$").unwrap());

static ACCESS_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^access_\w+$").unwrap());

/// Configuration for a [`MollieClient`](crate::MollieClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key (`test_...`/`live_...`) or organization access token (`access_...`)
    pub api_key: Option<String>,
    /// Base URL all relative paths are joined onto
    pub base_url: String,
    /// Request timeout
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    /// Page fetch rate used by `iterate` when the caller doesn't pass one
    pub values_per_minute: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("mollie-client/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
            values_per_minute: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build a config from `MOLLIE_API_KEY`, `MOLLIE_API_URL` and
    /// `MOLLIE_VALUES_PER_MINUTE`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| Error::missing_field(ENV_API_KEY))?;

        let mut builder = Self::builder().api_key(api_key);
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(url);
        }
        if let Ok(raw) = std::env::var(ENV_VALUES_PER_MINUTE) {
            let vpm = raw.parse::<u32>().map_err(|_| {
                Error::config(format!("{ENV_VALUES_PER_MINUTE} must be an integer, got '{raw}'"))
            })?;
            builder = builder.values_per_minute(vpm);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Check the credential shape and base URL
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = &self.api_key {
            if !API_KEY_REGEX.is_match(key) && !ACCESS_TOKEN_REGEX.is_match(key) {
                return Err(Error::config(
                    "API key must start with 'test_' or 'live_', access tokens with 'access_'",
                ));
            }
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    /// Whether the configured credential is a test-mode API key
    pub fn is_test_mode(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| key.starts_with("test_"))
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key or access token
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the default page fetch rate for `iterate`
    pub fn values_per_minute(mut self, vpm: u32) -> Self {
        self.config.values_per_minute = Some(vpm);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.values_per_minute.is_none());
        assert!(config.user_agent.starts_with("mollie-client/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .api_key("test_abc123")
            .base_url("http://localhost:8080/v2/")
            .timeout(Duration::from_secs(5))
            .user_agent("shop/1.0")
            .header("X-Custom", "value")
            .values_per_minute(120)
            .build();

        assert_eq!(config.api_key.as_deref(), Some("test_abc123"));
        assert_eq!(config.base_url, "http://localhost:8080/v2/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "shop/1.0");
        assert_eq!(
            config.default_headers.get("X-Custom"),
            Some(&"value".to_string())
        );
        assert_eq!(config.values_per_minute, Some(120));
        assert!(config.is_test_mode());
    }

    #[test]
    fn test_validate_rejects_malformed_key() {
        let config = ClientConfig::builder().api_key("sk_test_123").build();
        assert!(matches!(config.validate(), Err(Error::Config { .. })));

        let config = ClientConfig::builder().api_key("live_abc").build();
        assert!(config.validate().is_ok());
        assert!(!config.is_test_mode());

        let config = ClientConfig::builder().api_key("access_token123").build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ClientConfig::builder().base_url("not a url").build();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
api_key: test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM
timeout_secs: 10
values_per_minute: 60
default_headers:
  X-Request-Source: back-office
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.values_per_minute, Some(60));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.default_headers.get("X-Request-Source").map(String::as_str),
            Some("back-office")
        );
    }

    #[test]
    fn test_from_yaml_str_invalid_key() {
        let result = ClientConfig::from_yaml_str("api_key: nope\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: live_abc\nbase_url: http://127.0.0.1:9999/v2/").unwrap();

        let config = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v2/");
        assert_eq!(config.api_key.as_deref(), Some("live_abc"));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let result = ClientConfig::from_yaml_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
