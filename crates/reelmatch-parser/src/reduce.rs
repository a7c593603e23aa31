//! Search-term reduction.
//!
//! When a provider has nothing for a term, one word is dropped from either
//! end and the search is retried. Titles can be buried behind leading noise
//! (`[Group] Title`) or trailing noise (`Title.Group`), which is why both ends
//! are tried by the matcher.

use std::fmt;

use crate::term::SearchTerm;

/// Which end of a term loses a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Drop the first token.
    Forward,
    /// Drop the last token.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Outcome of a single [`reduce`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The shorter term, or `None` once the term cannot shrink any further.
    pub term: Option<SearchTerm>,
    /// The dropped token read as an integer. Non-numeric tokens and `0` give
    /// `None`. No calendar range check is applied here.
    pub year: Option<u32>,
}

impl Reduction {
    fn exhausted() -> Self {
        Self {
            term: None,
            year: None,
        }
    }

    /// True when no further reduction is possible.
    pub fn is_exhausted(&self) -> bool {
        self.term.is_none()
    }
}

/// Drop one token from `term` in the given direction.
///
/// A single-token term is terminal: the result carries neither a term nor a
/// year.
///
/// # Examples
///
/// ```
/// use reelmatch_parser::{reduce, Direction, SearchTerm};
///
/// let term = SearchTerm::from_joined("2012+The+Movie").unwrap();
/// let step = reduce(&term, Direction::Forward);
/// assert_eq!(step.term.unwrap().to_string(), "The+Movie");
/// assert_eq!(step.year, Some(2012));
///
/// let single = SearchTerm::from_joined("Movie").unwrap();
/// assert!(reduce(&single, Direction::Backward).is_exhausted());
/// ```
pub fn reduce(term: &SearchTerm, direction: Direction) -> Reduction {
    if term.len() <= 1 {
        return Reduction::exhausted();
    }

    let mut tokens = term.clone().into_tokens();
    let dropped = match direction {
        Direction::Forward => tokens.remove(0),
        Direction::Backward => tokens.pop().unwrap_or_default(),
    };

    Reduction {
        term: SearchTerm::from_tokens(tokens),
        year: parse_year(&dropped),
    }
}

fn parse_year(token: &str) -> Option<u32> {
    token.parse::<u32>().ok().filter(|year| *year != 0)
}
