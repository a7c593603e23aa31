//! Runs the search loop from both ends of the term and keeps the better
//! decision.

use reelmatch_common::{Error, Result};
use reelmatch_parser::Direction;
use tracing::{debug, info};

use super::engine::{MatchQuery, QueryEngine};
use super::scorer::MatchDecision;
use crate::config::MatchingConfig;
use crate::metadata::MetadataProvider;

/// Resolve `query` to a single catalog entry.
///
/// Both directions run concurrently. A direction that finds nothing is
/// dropped; a provider or protocol failure in either one fails the whole
/// resolution. When neither direction decides, the result is
/// [`Error::NoFilename`].
pub async fn resolve(
    provider: &dyn MetadataProvider,
    config: &MatchingConfig,
    query: &MatchQuery,
) -> Result<MatchDecision> {
    let engine = QueryEngine::new(provider, config);

    let (backward, forward) = tokio::try_join!(
        settle(&engine, query, Direction::Backward),
        settle(&engine, query, Direction::Forward),
    )?;

    let decision = pick(backward, forward).ok_or(Error::NoFilename)?;
    info!(
        filename = %decision.filename,
        name = %decision.name,
        provider_id = decision.provider_id,
        score = decision.match_score,
        "Resolved"
    );
    Ok(decision)
}

async fn settle(
    engine: &QueryEngine<'_>,
    query: &MatchQuery,
    direction: Direction,
) -> Result<Option<MatchDecision>> {
    match engine.run(query, direction).await {
        Ok(decision) => Ok(Some(decision)),
        Err(e) if e.is_recoverable() => {
            debug!(%direction, error = %e, "No decision");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Choose between the two directions' decisions.
///
/// A year match wins (backward checked first), then the lower score. On
/// equal scores the longer name wins, with backward needing to be strictly
/// longer.
pub fn pick(
    backward: Option<MatchDecision>,
    forward: Option<MatchDecision>,
) -> Option<MatchDecision> {
    match (backward, forward) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(b), Some(f)) => Some(if b.year_matches {
            b
        } else if f.year_matches {
            f
        } else if b.match_score == f.match_score {
            if b.name.chars().count() > f.name.chars().count() {
                b
            } else {
                f
            }
        } else if b.match_score < f.match_score {
            b
        } else {
            f
        }),
    }
}
