// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mollie API client
//!
//! Typed, async access to the Mollie v2 REST API with first-class support
//! for its HAL-style paginated lists.
//!
//! ## Features
//!
//! - **Typed resources**: payments, customers, subscriptions, chargebacks,
//!   captures, shipments, methods and profiles
//! - **Page navigation**: every [`Page`] can fetch its next or previous page
//! - **Lazy iteration**: [`Binder::iterate`](resources::Binder::iterate)
//!   streams records across pages, fetching only as fast as they are consumed
//! - **Pacing**: an optional values-per-minute cap on page fetches
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use mollie_client::{query, ClientConfig, MollieClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = MollieClient::new(
//!         ClientConfig::builder().api_key("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM").build(),
//!     )?;
//!
//!     // One page at a time
//!     let page = client.payments().page(&query([("limit", "5")])).await?;
//!     if let Some(next) = page.next_page() {
//!         let page = next.await?;
//!         println!("{} more payments", page.len());
//!     }
//!
//!     // Or every record, at most 60 page fetches a minute
//!     let mut payments = client.payments().iterate(&query([("limit", "250")]), Some(60));
//!     while let Some(payment) = payments.next().await {
//!         println!("{}", payment?.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  MollieClient  →  Binder<T>  (get / page / iterate / writes) │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │  ListEngine  │  Page<T>                 │  HttpClient        │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ page()       │ _embedded / _links       │ Transport seam     │
//! │ iterate()    │ next_page / previous_page│ problem+json errors│
//! │ Pacer        │ count check              │ no retries         │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client, transport seam and pacing
pub mod http;

/// HAL list pages and links
pub mod pagination;

/// Page and stream traversal
pub mod engine;

/// Resource id validation
pub mod ids;

/// Resource definitions, models and binders
pub mod resources;

/// Top-level client
pub mod client;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::MollieClient;
pub use config::ClientConfig;
pub use engine::{ListEngine, RecordStream};
pub use error::{Error, Result};
pub use pagination::{Link, Links, Page};
pub use types::{query, JsonValue, Mode, Query};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
