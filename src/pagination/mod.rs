//! Pagination module
//!
//! HAL-style list pages: records embedded under `_embedded[collection]`,
//! sibling `_links` with `self`/`next`/`previous`/`documentation`, and a
//! `count` that must match the embedded array.
//!
//! # Overview
//!
//! A [`Page`] owns its records and links and can fetch its neighbours:
//! [`Page::next_page`] and [`Page::previous_page`] return `None` when the
//! matching link is null, so asking for a page that doesn't exist is not
//! expressible.

mod types;

pub(crate) use types::PageSource;
pub use types::{deserialize_record, Link, Links, Page, Transform};

#[cfg(test)]
mod tests;
