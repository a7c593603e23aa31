//! TMDB (The Movie Database) metadata provider.
//!
//! Implements [`MetadataProvider`] by querying the TMDB v3 REST API.
//!
//! Features:
//! - Token-bucket rate limiting via [`governor`].
//! - Search requests surface HTTP 429 to the caller instead of retrying, so the
//!   matcher owns the backoff policy.
//! - Detail requests retry HTTP 429 with `Retry-After` support (max 3 retries).
//! - Configurable request timeout and base URLs.

use std::num::NonZeroU32;

use anyhow::Context;
use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use reelmatch_common::MediaType;
use reelmatch_parser::{EpisodeDescriptor, SearchTerm};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::TmdbConfig;
use crate::metadata::provider::{
    EpisodeInfo, MetadataProvider, MovieDetails, SearchPage, SearchResponse, TvDetails,
};

const MAX_RETRIES: u32 = 3;

/// TMDB metadata provider.
///
/// # Examples
///
/// ```no_run
/// use reelmatch::config::TmdbConfig;
/// use reelmatch::metadata::providers::TmdbProvider;
///
/// let config = TmdbConfig {
///     api_key: "your-api-key".into(),
///     ..TmdbConfig::default()
/// };
/// let provider = TmdbProvider::new(&config).unwrap();
/// ```
pub struct TmdbProvider {
    client: reqwest::Client,
    api_key: String,
    language: String,
    base_url: String,
    image_base_url: String,
    rate_limiter: governor::RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl TmdbProvider {
    /// Create a provider from configuration.
    pub fn new(config: &TmdbConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("failed to build HTTP client")?;

        let per_second = NonZeroU32::new(config.requests_per_second)
            .context("tmdb.requests_per_second must be positive")?;
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Send a rate-limited GET request without inspecting the status.
    async fn send(&self, path: &str, extra_params: &[(&str, &str)]) -> anyhow::Result<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{path}", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        params.extend_from_slice(extra_params);

        debug!(path = path, "TMDB request");

        self.client
            .get(&url)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("TMDB request failed: {path}"))
    }

    /// GET and decode a JSON body, retrying HTTP 429 a bounded number of times.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_params: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let mut retries = 0u32;
        loop {
            let resp = self.send(path, extra_params).await?;

            if resp.status() == StatusCode::TOO_MANY_REQUESTS && retries < MAX_RETRIES {
                retries += 1;
                let wait = retry_after_secs(&resp).unwrap_or(1);
                warn!(
                    retry = retries,
                    wait_secs = wait,
                    "TMDB returned 429, backing off"
                );
                tokio::time::sleep(std::time::Duration::from_secs(wait)).await;
                continue;
            }

            let resp = resp
                .error_for_status()
                .with_context(|| format!("TMDB request returned error: {path}"))?;

            return resp
                .json()
                .await
                .with_context(|| format!("failed to parse TMDB response: {path}"));
        }
    }
}

fn retry_after_secs(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn search(
        &self,
        term: &SearchTerm,
        media_type: MediaType,
    ) -> anyhow::Result<SearchResponse> {
        let path = format!("/search/{}", media_type.as_str());
        let query = term.query();
        let resp = self.send(&path, &[("query", query.as_str())]).await?;

        let status = resp.status();
        debug!(term = %term, status = status.as_u16(), "TMDB search");

        match status {
            StatusCode::OK => {
                let body = resp
                    .text()
                    .await
                    .context("failed to read TMDB search response")?;
                let page: SearchPage = serde_json::from_str(&body)
                    .context("failed to parse TMDB search response")?;
                Ok(SearchResponse::Page(page))
            }
            StatusCode::TOO_MANY_REQUESTS => Ok(SearchResponse::RateLimited),
            other => Ok(SearchResponse::Status(other.as_u16())),
        }
    }

    async fn movie_details(&self, id: u64) -> anyhow::Result<MovieDetails> {
        self.get_json(&format!("/movie/{id}"), &[("append_to_response", "credits")])
            .await
    }

    async fn tv_details(&self, id: u64) -> anyhow::Result<TvDetails> {
        self.get_json(&format!("/tv/{id}"), &[("append_to_response", "external_ids")])
            .await
    }

    async fn episode_info(
        &self,
        series_id: u64,
        episode: EpisodeDescriptor,
    ) -> anyhow::Result<Option<EpisodeInfo>> {
        let path = format!(
            "/tv/{series_id}/season/{}/episode/{}",
            episode.season_number, episode.episode_number
        );

        match self.get_json::<EpisodeInfo>(&path, &[]).await {
            Ok(info) => Ok(Some(info)),
            Err(err) if is_not_found(&err) => {
                debug!(series_id, path = %path, "TMDB has no such episode");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn image_url(&self, path: &str) -> String {
        format!("{}/original{path}", self.image_base_url)
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .any(|e| e.status() == Some(StatusCode::NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> TmdbProvider {
        let config = TmdbConfig {
            api_key: "test-key".into(),
            base_url: server.uri(),
            requests_per_second: 100,
            ..TmdbConfig::default()
        };
        TmdbProvider::new(&config).unwrap()
    }

    fn term(joined: &str) -> SearchTerm {
        SearchTerm::from_joined(joined).unwrap()
    }

    #[tokio::test]
    async fn search_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("query", "The Matrix"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 1,
                "total_results": 1,
                "results": [{ "id": 603, "title": "The Matrix", "release_date": "1999-03-31" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let resp = provider.search(&term("The+Matrix"), MediaType::Movie).await.unwrap();

        match resp {
            SearchResponse::Page(page) => {
                assert_eq!(page.total_results, 1);
                assert_eq!(page.results[0].id, 603);
                assert_eq!(page.results[0].title.as_deref(), Some("The Matrix"));
            }
            other => panic!("expected a page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_reports_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/tv"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let resp = provider.search(&term("Show"), MediaType::Tv).await.unwrap();
        assert!(matches!(resp, SearchResponse::RateLimited));
    }

    #[tokio::test]
    async fn search_reports_other_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let resp = provider.search(&term("Show"), MediaType::Movie).await.unwrap();
        assert!(matches!(resp, SearchResponse::Status(401)));
    }

    #[tokio::test]
    async fn search_rejects_garbage_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider
            .search(&term("Show"), MediaType::Movie)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse TMDB search response"));
    }

    #[tokio::test]
    async fn movie_details_append_credits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/603"))
            .and(query_param("append_to_response", "credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 603,
                "title": "The Matrix",
                "imdb_id": "tt0133093",
                "genres": [{ "id": 28, "name": "Action" }],
                "credits": {
                    "cast": [{ "name": "Keanu Reeves", "character": "Neo" }],
                    "crew": [{ "name": "Lana Wachowski", "job": "Director" }]
                }
            })))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let details = provider.movie_details(603).await.unwrap();
        assert_eq!(details.title.as_deref(), Some("The Matrix"));
        assert_eq!(details.imdb_id.as_deref(), Some("tt0133093"));
        assert_eq!(details.credits.cast[0].name, "Keanu Reeves");
        assert_eq!(details.credits.crew[0].job.as_deref(), Some("Director"));
    }

    #[tokio::test]
    async fn details_retry_after_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/1399"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tv/1399"))
            .and(query_param("append_to_response", "external_ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1399,
                "name": "Game of Thrones",
                "created_by": [{ "name": "David Benioff" }],
                "external_ids": { "imdb_id": "tt0944947" }
            })))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let details = provider.tv_details(1399).await.unwrap();
        assert_eq!(details.name.as_deref(), Some("Game of Thrones"));
        assert_eq!(
            details.external_ids.and_then(|ids| ids.imdb_id).as_deref(),
            Some("tt0944947")
        );
    }

    #[tokio::test]
    async fn episode_info_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/1399/season/3/episode/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "The Rains of Castamere",
                "overview": "Robb presents himself to Walder Frey.",
                "still_path": "/still.jpg",
                "guest_stars": [{ "name": "David Bradley", "character": "Walder Frey" }]
            })))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let info = provider
            .episode_info(
                1399,
                EpisodeDescriptor {
                    season_number: 3,
                    episode_number: 9,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(info.name.as_deref(), Some("The Rains of Castamere"));
        assert_eq!(info.guest_stars.len(), 1);
    }

    #[tokio::test]
    async fn episode_info_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/1399/season/30/episode/1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let info = provider
            .episode_info(
                1399,
                EpisodeDescriptor {
                    season_number: 30,
                    episode_number: 1,
                },
            )
            .await
            .unwrap();
        assert!(info.is_none());
    }

    #[test]
    fn image_url_construction() {
        let provider = TmdbProvider::new(&TmdbConfig {
            api_key: "key".into(),
            ..TmdbConfig::default()
        })
        .unwrap();
        assert_eq!(
            provider.image_url("/abc123.jpg"),
            "https://image.tmdb.org/t/p/original/abc123.jpg"
        );
    }

    #[test]
    fn zero_rate_is_rejected() {
        let config = TmdbConfig {
            requests_per_second: 0,
            ..TmdbConfig::default()
        };
        assert!(TmdbProvider::new(&config).is_err());
    }

    #[test]
    fn provider_is_available() {
        let provider = TmdbProvider::new(&TmdbConfig {
            api_key: "test-key".into(),
            ..TmdbConfig::default()
        })
        .unwrap();
        assert!(provider.is_available());
        assert_eq!(provider.name(), "tmdb");

        let empty = TmdbProvider::new(&TmdbConfig::default()).unwrap();
        assert!(!empty.is_available());
    }
}
