//! Candidate scoring and selection.
//!
//! Every dated search hit is scored by the edit distance between its
//! normalized title and the normalized filename. A hit whose date contains
//! the requested year beats one that does not; otherwise the lower distance
//! wins and the earlier hit keeps ties.

use reelmatch_common::{Error, MediaType, Result};
use reelmatch_parser::{normalize, SearchTerm};
use serde::{Deserialize, Serialize};

use super::distance::distance;
use crate::config::DistanceMode;
use crate::metadata::SearchHit;
use crate::translator::{translator_for, MediaTranslator};

/// A search hit with everything needed to compare it against others.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub hit: SearchHit,
    pub title: String,
    pub normalized_title: String,
    /// Normalized form of the term that produced this hit.
    pub search_term: String,
    /// Edit distance to the filename; lower is better.
    pub match_score: usize,
    pub release_date: String,
    pub release_year: Option<u32>,
    pub year_matches: bool,
}

impl CandidateRecord {
    /// Attach the input file and media type.
    pub fn into_decision(self, filename: &str, media_type: MediaType) -> MatchDecision {
        MatchDecision {
            name: self.title,
            provider_id: self.hit.id,
            match_score: self.match_score,
            year_matches: self.year_matches,
            filename: filename.to_string(),
            media_type,
        }
    }
}

/// The catalog entry chosen for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDecision {
    pub name: String,
    pub provider_id: u64,
    pub match_score: usize,
    pub year_matches: bool,
    pub filename: String,
    pub media_type: MediaType,
}

pub struct Scorer {
    translator: &'static dyn MediaTranslator,
    mode: DistanceMode,
}

impl Scorer {
    pub fn new(media_type: MediaType, mode: DistanceMode) -> Self {
        Self {
            translator: translator_for(media_type),
            mode,
        }
    }

    /// Build records for every hit that has a date and a title with at least
    /// one comparable character.
    pub fn candidates(
        &self,
        search_term: &SearchTerm,
        hits: Vec<SearchHit>,
        filename: &SearchTerm,
        year: Option<u32>,
    ) -> Vec<CandidateRecord> {
        let search_words = normalize(&search_term.to_string());
        let normalized_filename = normalize(&filename.to_string());
        let year = year.map(|y| y.to_string());

        hits.into_iter()
            .filter_map(|hit| {
                let release_date = hit.date()?.to_string();
                let title = self.translator.title(&hit)?.to_string();
                let normalized_title = normalize(&title);
                if normalized_title.is_empty() {
                    return None;
                }
                let match_score = distance(self.mode, &normalized_title, &normalized_filename);
                let year_matches = year.as_deref().is_some_and(|y| release_date.contains(y));

                Some(CandidateRecord {
                    release_year: self.translator.release_year(&hit),
                    hit,
                    title,
                    normalized_title,
                    search_term: search_words.clone(),
                    match_score,
                    release_date,
                    year_matches,
                })
            })
            .collect()
    }

    /// Pick the best hit, or [`Error::NoMatch`] when none is usable.
    pub fn score(
        &self,
        search_term: &SearchTerm,
        hits: Vec<SearchHit>,
        filename: &SearchTerm,
        year: Option<u32>,
    ) -> Result<CandidateRecord> {
        self.candidates(search_term, hits, filename, year)
            .into_iter()
            .reduce(|best, candidate| {
                if prefers(&best, &candidate, year.is_some()) {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(Error::NoMatch)
    }
}

/// Whether `candidate` should replace `best`.
fn prefers(best: &CandidateRecord, candidate: &CandidateRecord, has_year: bool) -> bool {
    if has_year && candidate.year_matches != best.year_matches {
        return candidate.year_matches;
    }
    candidate.match_score < best.match_score
}
