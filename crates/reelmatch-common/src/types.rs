//! Core type definitions shared by the parser, matcher, and CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog the provider is searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature films.
    Movie,
    /// TV series.
    Tv,
}

impl MediaType {
    /// Path segment used by the provider's search endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "tv" | "show" | "series" => Ok(Self::Tv),
            other => Err(crate::Error::invalid_input(format!(
                "unknown media type: {other}"
            ))),
        }
    }
}
