//! Data structures and types for cinedeck
//!
//! Contains all shared models used across the crate organized by domain:
//! - **Catalog**: paginated title lists and mixed search results
//! - **Detail**: single-title records with inlined credits, videos, similar
//! - **Stream**: stream candidates grouped by source and resolved playable links
//!
//! Field names mirror the upstream JSON keys; nothing is renamed on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Catalog Models
// =============================================================================

/// Media kind discriminator, doubles as the path segment in catalog URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the catalog API ("movie" or "tv")
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "TV Show"),
        }
    }
}

/// Trending time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendWindow {
    Day,
    Week,
}

impl TrendWindow {
    pub fn as_path(&self) -> &'static str {
        match self {
            TrendWindow::Day => "day",
            TrendWindow::Week => "week",
        }
    }
}

/// Image size token for the catalog CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    W500,
    Original,
    W1280,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
            ImageSize::W1280 => "w1280",
        }
    }
}

/// A single title in a catalog list (trending, popular, discover, search)
///
/// Movies carry `title`/`release_date`, series carry `name`/`first_air_date`;
/// use [`display_name`](CatalogItem::display_name) and
/// [`release_year`](CatalogItem::release_year) instead of picking a side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: f64,
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    pub popularity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaKind>,
}

impl CatalogItem {
    /// Normalized display name across the movie/series field split
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Release year parsed from whichever date field is present
    pub fn release_year(&self) -> Option<u16> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(extract_year)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release_year() {
            Some(year) => write!(f, "{} ({})", self.display_name(), year),
            None => write!(f, "{}", self.display_name()),
        }
    }
}

/// A person reference (cast/crew credit or multi-search hit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
    pub character: Option<String>,
    pub known_for_department: Option<String>,
}

/// One page of results as returned by the catalog API
///
/// Page size is controlled upstream; `results.len()` is at most whatever
/// the API hands back for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// One entry of a multi-search page, discriminated by the `media_type` tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum SearchEntry {
    Movie(CatalogItem),
    Tv(CatalogItem),
    Person(PersonRef),
}

impl SearchEntry {
    /// Media kind of this entry, `None` for people
    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            SearchEntry::Movie(_) => Some(MediaKind::Movie),
            SearchEntry::Tv(_) => Some(MediaKind::Tv),
            SearchEntry::Person(_) => None,
        }
    }

    /// Normalized display name regardless of entry shape
    pub fn display_name(&self) -> &str {
        match self {
            SearchEntry::Movie(item) | SearchEntry::Tv(item) => item.display_name(),
            SearchEntry::Person(person) => &person.name,
        }
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// Genre as returned inside detail records ({id, name} pairs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Cast and crew lists inlined via append_to_response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Vec<PersonRef>,
    pub crew: Vec<PersonRef>,
}

/// Externally-hosted trailer/clip reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRef {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Envelope for inlined video results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoList {
    pub results: Vec<VideoRef>,
}

/// Envelope for inlined similar-title results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleList {
    pub results: Vec<CatalogItem>,
}

/// Cross-reference identifiers for other catalogs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

/// Full detail record for a single movie or series
///
/// Sub-resources (credits, videos, similar titles, external IDs) are inlined
/// by the catalog API in the same round trip. `external_ids.imdb_id` is the
/// key used to look up stream candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub genres: Vec<Genre>,
    pub tagline: Option<String>,
    // Movies have a single runtime, series a list of per-episode run times
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub credits: Credits,
    pub videos: VideoList,
    pub similar: TitleList,
    pub external_ids: ExternalIds,
}

impl DetailRecord {
    /// Normalized display name across the movie/series field split
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Release year parsed from whichever date field is present
    pub fn release_year(&self) -> Option<u16> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(extract_year)
    }
}

impl fmt::Display for DetailRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release_year() {
            Some(year) => write!(
                f,
                "{} ({}) - ⭐ {:.1}",
                self.display_name(),
                year,
                self.vote_average
            ),
            None => write!(f, "{} - ⭐ {:.1}", self.display_name(), self.vote_average),
        }
    }
}

// =============================================================================
// Stream Models
// =============================================================================

/// A single stream candidate offered by a source
///
/// `quality` is a free-form label from upstream, `url` an opaque locator that
/// must be resolved before it can be played.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamCandidate {
    pub quality: String,
    pub title: String,
    pub url: String,
}

/// Stream candidates grouped by source name
///
/// Key order is source-dependent and carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamsBySource {
    pub streams: HashMap<String, Vec<StreamCandidate>>,
}

impl StreamsBySource {
    /// True when no source offered any candidate
    pub fn is_empty(&self) -> bool {
        self.streams.values().all(|candidates| candidates.is_empty())
    }
}

/// A resolved, directly playable stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayableStream {
    /// Language code → human-readable label
    pub audio_lang: HashMap<String, String>,
    /// Duration in seconds
    pub duration: f64,
    /// Size in bytes
    pub size: u64,
    /// Quality label → direct URL
    pub streams: HashMap<String, String>,
}

/// Extract year from a date string like "2022-03-04"
fn extract_year(date: &str) -> Option<u16> {
    if date.len() >= 4 {
        date[..4].parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_item(title: Option<&str>, name: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: 1,
            title: title.map(String::from),
            name: name.map(String::from),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            first_air_date: None,
            vote_average: 0.0,
            vote_count: 0,
            genre_ids: vec![],
            popularity: 0.0,
            media_type: None,
        }
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2022-03-04"), Some(2022));
        assert_eq!(extract_year("2019-11-12"), Some(2019));
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("abc"), None);
    }

    #[test]
    fn test_display_name_prefers_title() {
        let movie = bare_item(Some("The Batman"), None);
        assert_eq!(movie.display_name(), "The Batman");

        let show = bare_item(None, Some("Breaking Bad"));
        assert_eq!(show.display_name(), "Breaking Bad");

        let both = bare_item(Some("Title"), Some("Name"));
        assert_eq!(both.display_name(), "Title");

        let neither = bare_item(None, None);
        assert_eq!(neither.display_name(), "");
    }

    #[test]
    fn test_release_year_falls_back_to_first_air_date() {
        let mut item = bare_item(None, Some("Show"));
        item.first_air_date = Some("2008-01-20".to_string());
        assert_eq!(item.release_year(), Some(2008));

        item.release_date = Some("2010-05-01".to_string());
        assert_eq!(item.release_year(), Some(2010));
    }

    #[test]
    fn test_search_entry_discriminates_on_media_type() {
        let json = r#"{
            "media_type": "tv",
            "id": 1396,
            "name": "Breaking Bad",
            "overview": "A chemistry teacher",
            "poster_path": null,
            "backdrop_path": null,
            "first_air_date": "2008-01-20",
            "vote_average": 9.5,
            "vote_count": 12000,
            "genre_ids": [18, 80],
            "popularity": 450.3
        }"#;

        let entry: SearchEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind(), Some(MediaKind::Tv));
        assert_eq!(entry.display_name(), "Breaking Bad");

        let person = r#"{
            "media_type": "person",
            "id": 500,
            "name": "Tom Cruise",
            "profile_path": "/tom.jpg",
            "known_for_department": "Acting"
        }"#;

        let entry: SearchEntry = serde_json::from_str(person).unwrap();
        assert_eq!(entry.kind(), None);
        assert_eq!(entry.display_name(), "Tom Cruise");
    }

    #[test]
    fn test_streams_by_source_is_empty() {
        let empty = StreamsBySource {
            streams: HashMap::new(),
        };
        assert!(empty.is_empty());

        let mut only_empty_sources = HashMap::new();
        only_empty_sources.insert("vidsrc".to_string(), vec![]);
        assert!(StreamsBySource {
            streams: only_empty_sources
        }
        .is_empty());

        let mut populated = HashMap::new();
        populated.insert(
            "vidsrc".to_string(),
            vec![StreamCandidate {
                quality: "1080p".to_string(),
                title: "Some Movie".to_string(),
                url: "https://example.com/watch/1".to_string(),
            }],
        );
        assert!(!StreamsBySource { streams: populated }.is_empty());
    }
}
