//! Page-assembly helpers
//!
//! Each loader fans out a fixed set of independent catalog requests, waits
//! for all of them, and zips the results into a named composite record for
//! template rendering. A single failed request fails the whole page; there
//! is no partial-result mode. Sibling requests are not cancelled when one
//! fails — everything runs to settlement before errors are inspected.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::api::CatalogClient;
use crate::models::{CatalogItem, DetailRecord, MediaKind, SearchEntry, TrendWindow};

// Genre IDs as assigned by the catalog API
const GENRE_ACTION: u64 = 28;
const GENRE_COMEDY: u64 = 35;
const GENRE_DRAMA: u64 = 18;
const GENRE_HORROR: u64 = 27;

/// Landing page: movie shelves
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub trending: Vec<CatalogItem>,
    pub popular: Vec<CatalogItem>,
    pub top_rated: Vec<CatalogItem>,
    pub upcoming: Vec<CatalogItem>,
}

/// Movies-by-genre page
#[derive(Debug, Clone, Serialize)]
pub struct MoviesPage {
    pub action: Vec<CatalogItem>,
    pub comedy: Vec<CatalogItem>,
    pub drama: Vec<CatalogItem>,
    pub horror: Vec<CatalogItem>,
}

/// New-releases page
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub trending_day: Vec<CatalogItem>,
    pub trending_week: Vec<CatalogItem>,
    pub upcoming: Vec<CatalogItem>,
    pub popular: Vec<CatalogItem>,
}

/// Series browsing page
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPage {
    pub trending: Vec<CatalogItem>,
    pub popular: Vec<CatalogItem>,
    pub top_rated: Vec<CatalogItem>,
    pub on_air: Vec<CatalogItem>,
}

/// Search results page
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub results: Vec<SearchEntry>,
    pub query: String,
}

/// Assemble the landing page
pub async fn load_home(catalog: &CatalogClient) -> Result<HomePage> {
    let (trending, popular, top_rated, upcoming) = tokio::join!(
        catalog.list_trending(TrendWindow::Day, MediaKind::Movie),
        catalog.list_popular(MediaKind::Movie),
        catalog.list_top_rated(MediaKind::Movie),
        catalog.list_upcoming(),
    );

    Ok(HomePage {
        trending: trending?.results,
        popular: popular?.results,
        top_rated: top_rated?.results,
        upcoming: upcoming?.results,
    })
}

/// Assemble the movies-by-genre page
pub async fn load_movies(catalog: &CatalogClient) -> Result<MoviesPage> {
    let (action, comedy, drama, horror) = tokio::join!(
        catalog.list_by_genre(GENRE_ACTION),
        catalog.list_by_genre(GENRE_COMEDY),
        catalog.list_by_genre(GENRE_DRAMA),
        catalog.list_by_genre(GENRE_HORROR),
    );

    Ok(MoviesPage {
        action: action?.results,
        comedy: comedy?.results,
        drama: drama?.results,
        horror: horror?.results,
    })
}

/// Assemble the new-releases page
pub async fn load_new(catalog: &CatalogClient) -> Result<NewPage> {
    let (trending_day, trending_week, upcoming, popular) = tokio::join!(
        catalog.list_trending(TrendWindow::Day, MediaKind::Movie),
        catalog.list_trending(TrendWindow::Week, MediaKind::Movie),
        catalog.list_upcoming(),
        catalog.list_popular(MediaKind::Movie),
    );

    Ok(NewPage {
        trending_day: trending_day?.results,
        trending_week: trending_week?.results,
        upcoming: upcoming?.results,
        popular: popular?.results,
    })
}

/// Assemble the series browsing page
pub async fn load_series(catalog: &CatalogClient) -> Result<SeriesPage> {
    let (trending, popular, top_rated, on_air) = tokio::join!(
        catalog.list_trending(TrendWindow::Day, MediaKind::Tv),
        catalog.list_popular(MediaKind::Tv),
        catalog.list_top_rated(MediaKind::Tv),
        catalog.list_on_air(),
    );

    Ok(SeriesPage {
        trending: trending?.results,
        popular: popular?.results,
        top_rated: top_rated?.results,
        on_air: on_air?.results,
    })
}

/// Load the detail record for a movie page
pub async fn load_movie(catalog: &CatalogClient, id: u64) -> Result<DetailRecord> {
    catalog.get_details(id, MediaKind::Movie).await
}

/// Load the detail record for a series page
pub async fn load_tv(catalog: &CatalogClient, id: u64) -> Result<DetailRecord> {
    catalog.get_details(id, MediaKind::Tv).await
}

/// Assemble the search page
///
/// An absent or empty query short-circuits to an empty result set without
/// touching the network; that is the page's normal "no query yet" state,
/// not an error.
pub async fn load_search(catalog: &CatalogClient, query: Option<&str>) -> Result<SearchPage> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => {
            debug!("empty search query, skipping upstream call");
            return Ok(SearchPage {
                results: Vec::new(),
                query: String::new(),
            });
        }
    };

    let response = catalog.search_multi(query).await?;

    Ok(SearchPage {
        results: response.results,
        query: query.to_string(),
    })
}
