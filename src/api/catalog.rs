//! Catalog API client
//!
//! Typed wrapper over the movie/TV metadata API: discovery lists, single-title
//! detail records with inlined sub-resources, text search, and image URLs.
//! API docs: https://developer.themoviedb.org/docs

use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::ApiError;
use crate::models::{
    CatalogItem, DetailRecord, ImageSize, MediaKind, Paginated, SearchEntry, TrendWindow,
};

const CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Sub-resources inlined into detail records in a single round trip
const APPENDED_SUB_RESOURCES: &str = "credits,videos,similar,external_ids";

/// Catalog API client
///
/// Every request carries the `api_key` query parameter. Any non-2xx response
/// fails with [`ApiError::Upstream`]; there is no retry or per-status
/// handling.
pub struct CatalogClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, CATALOG_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// GET an endpoint with the API key plus the given query parameters
    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream(status).into());
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body).map_err(ApiError::Schema)?;
        Ok(parsed)
    }

    /// Get trending titles for a time window
    pub async fn list_trending(
        &self,
        window: TrendWindow,
        kind: MediaKind,
    ) -> Result<Paginated<CatalogItem>> {
        let path = format!("/trending/{}/{}", kind.as_path(), window.as_path());
        self.get(&path, &[]).await
    }

    /// Get popular titles
    pub async fn list_popular(&self, kind: MediaKind) -> Result<Paginated<CatalogItem>> {
        self.get(&format!("/{}/popular", kind.as_path()), &[]).await
    }

    /// Get top-rated titles
    pub async fn list_top_rated(&self, kind: MediaKind) -> Result<Paginated<CatalogItem>> {
        self.get(&format!("/{}/top_rated", kind.as_path()), &[])
            .await
    }

    /// Get upcoming movies (movies only)
    pub async fn list_upcoming(&self) -> Result<Paginated<CatalogItem>> {
        self.get("/movie/upcoming", &[]).await
    }

    /// Get series currently on the air (series only)
    pub async fn list_on_air(&self) -> Result<Paginated<CatalogItem>> {
        self.get("/tv/on_the_air", &[]).await
    }

    /// Discover movies by genre ID
    ///
    /// Genre IDs are the integer constants assigned by the catalog API;
    /// there is no local genre registry.
    pub async fn list_by_genre(&self, genre_id: u64) -> Result<Paginated<CatalogItem>> {
        self.get("/discover/movie", &[("with_genres", genre_id.to_string())])
            .await
    }

    /// Get the full detail record for a title
    ///
    /// Credits, videos, similar titles, and external IDs are inlined by the
    /// upstream API in the same round trip.
    pub async fn get_details(&self, id: u64, kind: MediaKind) -> Result<DetailRecord> {
        debug!(id, kind = %kind.as_path(), "fetching detail record");
        let path = format!("/{}/{}", kind.as_path(), id);
        self.get(
            &path,
            &[("append_to_response", APPENDED_SUB_RESOURCES.to_string())],
        )
        .await
    }

    /// Search movies by title
    pub async fn search_titles(&self, query: &str) -> Result<Paginated<CatalogItem>> {
        debug!(query, "movie search");
        self.get("/search/movie", &[("query", query.to_string())])
            .await
    }

    /// Search across movies, series, and people
    ///
    /// Entries are mixed; discriminate with [`SearchEntry::kind`].
    pub async fn search_multi(&self, query: &str) -> Result<Paginated<SearchEntry>> {
        debug!(query, "multi search");
        self.get("/search/multi", &[("query", query.to_string())])
            .await
    }
}

/// Build an image CDN URL for a poster/backdrop path
///
/// Returns an empty string when the path is absent, which templates render
/// as "no image".
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_with_path() {
        assert_eq!(
            image_url(Some("/74xTEgt7R36Fpooo50r9T25onhq.jpg"), ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/74xTEgt7R36Fpooo50r9T25onhq.jpg"
        );
        assert_eq!(
            image_url(Some("/backdrop.jpg"), ImageSize::W1280),
            "https://image.tmdb.org/t/p/w1280/backdrop.jpg"
        );
        assert_eq!(
            image_url(Some("/poster.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/poster.jpg"
        );
    }

    #[test]
    fn test_image_url_without_path() {
        assert_eq!(image_url(None, ImageSize::W500), "");
        assert_eq!(image_url(None, ImageSize::Original), "");
        assert_eq!(image_url(None, ImageSize::W1280), "");
    }

    #[test]
    fn test_image_size_default_is_w500() {
        assert_eq!(ImageSize::default(), ImageSize::W500);
    }
}
