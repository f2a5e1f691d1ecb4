//! HTTP client module
//!
//! Provides the reqwest-backed client, the [`Transport`] seam the list
//! engine fetches through, and the [`Pacer`] that spaces page fetches.
//!
//! # Features
//!
//! - **Base URL resolution**: relative resource paths and absolute link hrefs
//! - **Error mapping**: Mollie problem documents become [`crate::Error::Api`]
//! - **Pacing**: minimum-interval limiter using governor

mod client;
mod pacer;
mod transport;

pub use client::{HttpClient, RequestConfig};
pub use pacer::Pacer;
pub use transport::Transport;
