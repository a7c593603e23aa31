//! In-memory provider used by matcher and identifier tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reelmatch_common::MediaType;
use reelmatch_parser::{EpisodeDescriptor, SearchTerm};

use super::provider::{
    EpisodeInfo, MetadataProvider, MovieDetails, SearchHit, SearchPage, SearchResponse, TvDetails,
};

/// Canned reply for one search call.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Hits(Vec<SearchHit>),
    RateLimited,
    Status(u16),
    Fail(String),
}

/// Provider that answers searches from a per-term script and records every
/// term it was asked for. Unscripted terms return an empty page.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    searches: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
    movies: HashMap<u64, MovieDetails>,
    series: HashMap<u64, TvDetails>,
    episodes: HashMap<(u64, u32, u32), EpisodeInfo>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the `+`-joined term. Replies are consumed in order
    /// and the last one repeats.
    pub(crate) fn on(self, term: &str, reply: Reply) -> Self {
        self.searches
            .lock()
            .unwrap()
            .entry(term.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub(crate) fn with_movie(mut self, details: MovieDetails) -> Self {
        self.movies.insert(details.id, details);
        self
    }

    pub(crate) fn with_series(mut self, details: TvDetails) -> Self {
        self.series.insert(details.id, details);
        self
    }

    pub(crate) fn with_episode(mut self, series_id: u64, season: u32, episode: u32, info: EpisodeInfo) -> Self {
        self.episodes.insert((series_id, season, episode), info);
        self
    }

    /// Every searched term, `+`-joined, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// A dated movie hit.
pub(crate) fn movie_hit(id: u64, title: &str, release_date: &str) -> SearchHit {
    SearchHit {
        id,
        title: Some(title.to_string()),
        release_date: Some(release_date.to_string()),
        ..SearchHit::default()
    }
}

/// A dated series hit.
pub(crate) fn tv_hit(id: u64, original_name: &str, first_air_date: &str) -> SearchHit {
    SearchHit {
        id,
        original_name: Some(original_name.to_string()),
        name: Some(original_name.to_string()),
        first_air_date: Some(first_air_date.to_string()),
        ..SearchHit::default()
    }
}

#[async_trait]
impl MetadataProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn search(
        &self,
        term: &SearchTerm,
        _media_type: MediaType,
    ) -> anyhow::Result<SearchResponse> {
        let key = term.to_string();
        self.calls.lock().unwrap().push(key.clone());

        let reply = self
            .searches
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });

        match reply {
            None => Ok(SearchResponse::Page(SearchPage::default())),
            Some(Reply::Hits(results)) => Ok(SearchResponse::Page(SearchPage {
                total_results: results.len() as u32,
                results,
            })),
            Some(Reply::RateLimited) => Ok(SearchResponse::RateLimited),
            Some(Reply::Status(code)) => Ok(SearchResponse::Status(code)),
            Some(Reply::Fail(msg)) => Err(anyhow::anyhow!(msg)),
        }
    }

    async fn movie_details(&self, id: u64) -> anyhow::Result<MovieDetails> {
        self.movies
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no movie {id}"))
    }

    async fn tv_details(&self, id: u64) -> anyhow::Result<TvDetails> {
        self.series
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no series {id}"))
    }

    async fn episode_info(
        &self,
        series_id: u64,
        episode: EpisodeDescriptor,
    ) -> anyhow::Result<Option<EpisodeInfo>> {
        Ok(self
            .episodes
            .get(&(series_id, episode.season_number, episode.episode_number))
            .cloned())
    }

    fn image_url(&self, path: &str) -> String {
        format!("https://image.tmdb.org/t/p/original{path}")
    }
}
