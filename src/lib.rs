//! cinedeck - Catalog and stream aggregation layer for a movie/TV browsing site
//!
//! Fetches catalog metadata and stream sources from two upstream HTTP APIs
//! and reshapes the JSON into composite records ready for page templates.
//!
//! # Modules
//!
//! - `models` - Data structures for catalog lists, detail records, streams
//! - `api` - API clients (catalog metadata, stream sources)
//! - `pages` - Page-assembly fan-out helpers
//! - `config` - Config file loading and API key resolution

pub mod api;
pub mod config;
pub mod models;
pub mod pages;

// Re-export commonly used types
pub use models::{
    CatalogItem, DetailRecord, ImageSize, MediaKind, Paginated, PersonRef, PlayableStream,
    SearchEntry, StreamCandidate, StreamsBySource, TrendWindow,
};

pub use api::{image_url, ApiError, CatalogClient, StreamClient};
pub use config::Config;
pub use pages::{
    load_home, load_movie, load_movies, load_new, load_search, load_series, load_tv, HomePage,
    MoviesPage, NewPage, SearchPage, SeriesPage,
};
