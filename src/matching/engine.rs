//! Search loop for one reduction direction.
//!
//! ```text
//! Searching(term, year) --200, hits------> Matched
//!                       --200, empty-----> Reducing --term--> Searching
//!                                                   --none--> NoMatch
//!                       --429------------> RateLimited --sleep--> Searching
//!                       --other status---> Failed
//! ```
//!
//! Reduction shrinks the term by one token per step, so a term of N tokens
//! issues at most N distinct searches. Rate-limit retries repeat the same
//! search and are not counted.

use reelmatch_common::{paths, Error, MediaType, Result};
use reelmatch_parser::{reduce, sanitize, Direction};
use tracing::{debug, info, warn};

use super::scorer::{MatchDecision, Scorer};
use crate::config::MatchingConfig;
use crate::metadata::{MetadataProvider, SearchResponse};

const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2100;

/// A single identification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub filename: String,
    pub media_type: MediaType,
    pub year: Option<u32>,
}

impl MatchQuery {
    pub fn new(filename: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            filename: filename.into(),
            media_type,
            year: None,
        }
    }

    /// Attach a known release year. `0` is treated as unknown.
    pub fn with_year(mut self, year: Option<u32>) -> Self {
        self.year = year.filter(|y| *y != 0);
        self
    }
}

pub struct QueryEngine<'a> {
    provider: &'a dyn MetadataProvider,
    config: &'a MatchingConfig,
}

impl<'a> QueryEngine<'a> {
    pub fn new(provider: &'a dyn MetadataProvider, config: &'a MatchingConfig) -> Self {
        Self { provider, config }
    }

    /// Search until a candidate is chosen or the term runs out.
    ///
    /// Errors with [`Error::NoFilename`] when the filename has no searchable
    /// words (no provider call is made), [`Error::NoMatch`] when every
    /// reduction came back empty, [`Error::UnexpectedStatus`] on a status
    /// other than 200/429, and [`Error::Provider`] on transport failures.
    pub async fn run(&self, query: &MatchQuery, direction: Direction) -> Result<MatchDecision> {
        if query.filename.trim().is_empty() {
            return Err(Error::NoFilename);
        }
        let filename = sanitize(&query.filename).ok_or(Error::NoFilename)?;
        let scorer = Scorer::new(query.media_type, self.config.distance);

        let mut term = filename.clone();
        let mut year = query.year;

        loop {
            let response = self
                .provider
                .search(&term, query.media_type)
                .await
                .map_err(|e| Error::provider(format!("{}: {e:#}", self.provider.name())))?;

            match response {
                SearchResponse::Page(page) if page.total_results == 0 => {
                    let reduction = reduce(&term, direction);
                    let Some(next) = reduction.term else {
                        debug!(%direction, term = %term, "Search term exhausted");
                        return Err(Error::NoMatch);
                    };
                    year = self.reduced_year(reduction.year);
                    debug!(%direction, from = %term, to = %next, ?year, "No results, reducing term");
                    term = next;
                }
                SearchResponse::Page(page) => {
                    let best = scorer.score(&term, page.results, &filename, year)?;
                    info!(
                        %direction,
                        term = %term,
                        name = %best.title,
                        normalized = %best.normalized_title,
                        words = %best.search_term,
                        score = best.match_score,
                        year_matches = best.year_matches,
                        "Candidate selected"
                    );
                    return Ok(best.into_decision(paths::file_name(&query.filename), query.media_type));
                }
                SearchResponse::RateLimited => {
                    let backoff = self.config.rate_limit_backoff();
                    warn!(
                        %direction,
                        term = %term,
                        wait_secs = backoff.as_secs(),
                        "Provider rate limited search, backing off"
                    );
                    tokio::time::sleep(backoff).await;
                }
                SearchResponse::Status(code) => {
                    warn!(%direction, term = %term, status = code, "Unexpected search status");
                    return Err(Error::UnexpectedStatus(code));
                }
            }
        }
    }

    fn reduced_year(&self, year: Option<u32>) -> Option<u32> {
        if self.config.validate_reduced_year {
            year.filter(|y| YEAR_RANGE.contains(y))
        } else {
            year
        }
    }
}
