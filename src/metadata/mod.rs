//! Metadata provider layer.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition and shared data types.
//! - [`providers`] -- Concrete provider implementations (TMDB).

pub mod provider;
pub mod providers;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use provider::{
    EpisodeInfo, MetadataProvider, MovieDetails, SearchHit, SearchPage, SearchResponse, TvDetails,
};
pub use providers::TmdbProvider;
