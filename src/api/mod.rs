//! API clients for the two upstream services
//!
//! - Catalog: movie/TV metadata, discovery lists, search, image URLs
//! - Streams: per-source stream candidates and playable-link resolution

pub mod catalog;
pub mod streams;

pub use catalog::{image_url, CatalogClient};
pub use streams::StreamClient;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes shared by both upstream clients
///
/// Every non-2xx response maps to [`Upstream`](ApiError::Upstream) regardless
/// of status code; callers get no not-found/rate-limited distinction to act
/// on. A 2xx body that fails typed decode maps to
/// [`Schema`](ApiError::Schema).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("upstream error: {0}")]
    Upstream(StatusCode),

    #[error("unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),
}
