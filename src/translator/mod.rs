//! Translators reshape a confirmed provider record into [`MediaDetails`].
//!
//! One [`MediaTranslator`] exists per [`MediaType`]; [`translator_for`] picks
//! it. Translators also know how to read a title and release year off a raw
//! [`SearchHit`], which the scorer relies on.

mod movie;
mod tv;

pub use movie::MovieTranslator;
pub use tv::TvTranslator;

use async_trait::async_trait;
use reelmatch_common::MediaType;
use serde::{Deserialize, Serialize};

use crate::metadata::{MetadataProvider, SearchHit};

/// Output record for a matched title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDetails {
    pub title: Option<String>,
    pub id: u64,
    pub long_plot: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub budget: Option<u64>,
    pub genres: Vec<String>,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub imdb_id: Option<String>,
}

#[async_trait]
pub trait MediaTranslator: Send + Sync {
    fn media_type(&self) -> MediaType;

    /// Display title of a search hit, if it carries one.
    fn title<'a>(&self, hit: &'a SearchHit) -> Option<&'a str>;

    /// Year prefix of the hit's release (or first air) date.
    fn release_year(&self, hit: &SearchHit) -> Option<u32>;

    /// Fetch and translate the full record for `id`.
    async fn details(
        &self,
        provider: &dyn MetadataProvider,
        id: u64,
    ) -> anyhow::Result<MediaDetails>;
}

static MOVIE: MovieTranslator = MovieTranslator;
static TV: TvTranslator = TvTranslator;

/// The translator for `media_type`.
pub fn translator_for(media_type: MediaType) -> &'static dyn MediaTranslator {
    match media_type {
        MediaType::Movie => &MOVIE,
        MediaType::Tv => &TV,
    }
}

/// Leading `YYYY` of a `YYYY-MM-DD` date.
pub(crate) fn year_of(date: Option<&str>) -> Option<u32> {
    date?.split('-').next()?.trim().parse().ok()
}
