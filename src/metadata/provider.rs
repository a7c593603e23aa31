//! Trait definition and types for metadata providers.
//!
//! This module defines the [`MetadataProvider`] trait the matcher queries,
//! along with the shared data types returned by provider calls. Search calls
//! report rate limiting and unexpected statuses as values so the matcher can
//! decide how to react; detail calls are plain fallible lookups.

use async_trait::async_trait;
use reelmatch_common::MediaType;
use reelmatch_parser::{EpisodeDescriptor, SearchTerm};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// One page of a provider search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// A single raw search result, movie or TV.
///
/// Movies carry `title`/`release_date`, series carry
/// `name`/`original_name`/`first_air_date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl SearchHit {
    /// Release date, falling back to the first air date. Empty strings count
    /// as missing.
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.release_date).or_else(|| non_empty(&self.first_air_date))
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Outcome of a search request.
#[derive(Debug, Clone)]
pub enum SearchResponse {
    /// HTTP 200 with a decoded body.
    Page(SearchPage),
    /// HTTP 429.
    RateLimited,
    /// Any other HTTP status.
    Status(u16),
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Full movie record (`/movie/{id}` with credits appended).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub credits: Credits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

/// Full series record (`/tv/{id}` with external ids appended).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestStar {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

/// A single episode record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub still_path: Option<String>,
    #[serde(default)]
    pub guest_stars: Vec<GuestStar>,
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Async trait that all metadata providers must implement.
///
/// Providers are expected to be wrapped in an `Arc` so they can be shared
/// across tasks.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the provider has credentials and can serve
    /// requests.
    fn is_available(&self) -> bool;

    /// Search the catalog selected by `media_type` for `term`.
    ///
    /// Only transport and decoding failures are errors; HTTP 429 and other
    /// statuses come back as [`SearchResponse`] variants.
    async fn search(
        &self,
        term: &SearchTerm,
        media_type: MediaType,
    ) -> anyhow::Result<SearchResponse>;

    async fn movie_details(&self, id: u64) -> anyhow::Result<MovieDetails>;

    async fn tv_details(&self, id: u64) -> anyhow::Result<TvDetails>;

    /// Look up one episode of a series. `Ok(None)` when the provider does not
    /// know the episode.
    async fn episode_info(
        &self,
        series_id: u64,
        episode: EpisodeDescriptor,
    ) -> anyhow::Result<Option<EpisodeInfo>>;

    /// Full URL for an image path fragment such as `"/abc.jpg"`.
    fn image_url(&self, path: &str) -> String;
}
