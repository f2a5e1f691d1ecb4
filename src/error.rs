//! Error types for the Mollie client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Nothing in this crate retries: errors surface to the caller as-is.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the Mollie client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// A non-2xx response carrying Mollie's problem document
    #[error("API error {status} ({title}): {detail}")]
    Api {
        status: u16,
        title: String,
        detail: String,
        field: Option<String>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("No '{rel}' link on this page")]
    NoSuchLink { rel: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("The {resource} id is invalid: '{id}'")]
    InvalidId { resource: String, id: String },

    #[error("{resource} does not support {operation}")]
    UnsupportedOperation {
        resource: String,
        operation: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a missing link error
    pub fn no_such_link(rel: impl Into<String>) -> Self {
        Self::NoSuchLink { rel: rel.into() }
    }

    /// Create an invalid id error
    pub fn invalid_id(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::InvalidId {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            resource: resource.into(),
            operation: operation.into(),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// Mollie answers failures with `application/hal+json` problem documents;
    /// anything that doesn't parse as one falls back to [`Error::HttpStatus`].
    pub fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ProblemBody>(body) {
            Ok(problem) => Self::Api {
                status: problem.status.unwrap_or(status),
                title: problem.title,
                detail: problem.detail,
                field: problem.field,
            },
            Err(_) => Self::http_status(status, body),
        }
    }

    /// HTTP status code, for transport-level and API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ProblemBody {
    status: Option<u16>,
    title: String,
    detail: String,
    field: Option<String>,
}

/// Result type alias for the Mollie client
pub type Result<T> = std::result::Result<T, Error>;
