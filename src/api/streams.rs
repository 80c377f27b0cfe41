//! Stream source API client
//!
//! Lists stream candidates grouped by source for a title (keyed by IMDB ID)
//! and resolves a candidate URL into a directly playable link with audio
//! track, duration, and size metadata.

use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::ApiError;
use crate::models::{PlayableStream, StreamsBySource};

const STREAM_BASE_URL: &str = "https://stream.cinedeck.app";

/// Stream source API client
///
/// Same GET / status-check / decode contract as the catalog client, against
/// a different origin and with no API key.
pub struct StreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl StreamClient {
    /// Create a new stream client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(STREAM_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Get stream candidates for a movie by IMDB ID
    pub async fn list_movie_streams(&self, imdb_id: &str) -> Result<StreamsBySource> {
        self.get(&format!("{}/movies/{}", self.base_url, imdb_id))
            .await
    }

    /// Get stream candidates for a series episode by IMDB ID
    pub async fn list_series_streams(
        &self,
        imdb_id: &str,
        season: u32,
        episode: u32,
    ) -> Result<StreamsBySource> {
        self.get(&format!(
            "{}/series/{}/{}/{}",
            self.base_url, imdb_id, season, episode
        ))
        .await
    }

    /// Resolve a stream candidate URL into a directly playable link
    ///
    /// The candidate URL travels as a single percent-encoded query value.
    pub async fn resolve_playable(&self, candidate_url: &str) -> Result<PlayableStream> {
        self.get(&format!(
            "{}/stream?url={}",
            self.base_url,
            urlencoding::encode(candidate_url)
        ))
        .await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "stream request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream(status).into());
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body).map_err(ApiError::Schema)?;
        Ok(parsed)
    }
}

impl Default for StreamClient {
    fn default() -> Self {
        Self::new()
    }
}
