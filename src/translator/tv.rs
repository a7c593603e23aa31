use async_trait::async_trait;
use reelmatch_common::MediaType;

use super::{year_of, MediaDetails, MediaTranslator};
use crate::metadata::provider::{non_empty, TvDetails};
use crate::metadata::{MetadataProvider, SearchHit};

pub struct TvTranslator;

impl TvTranslator {
    /// Map a series record with external ids onto [`MediaDetails`].
    pub fn translate(details: TvDetails) -> MediaDetails {
        let creators: Vec<&str> = details.created_by.iter().map(|c| c.name.as_str()).collect();

        MediaDetails {
            director: creators.join(","),
            title: details.name,
            id: details.id,
            long_plot: details.overview,
            release_date: details.first_air_date,
            poster_path: details.poster_path,
            backdrop_path: details.backdrop_path,
            budget: None,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            writer: String::new(),
            actors: String::new(),
            imdb_id: details.external_ids.and_then(|ids| ids.imdb_id),
        }
    }
}

#[async_trait]
impl MediaTranslator for TvTranslator {
    fn media_type(&self) -> MediaType {
        MediaType::Tv
    }

    fn title<'a>(&self, hit: &'a SearchHit) -> Option<&'a str> {
        non_empty(&hit.original_name).or_else(|| non_empty(&hit.name))
    }

    fn release_year(&self, hit: &SearchHit) -> Option<u32> {
        year_of(non_empty(&hit.first_air_date))
    }

    async fn details(
        &self,
        provider: &dyn MetadataProvider,
        id: u64,
    ) -> anyhow::Result<MediaDetails> {
        let details = provider.tv_details(id).await?;
        Ok(Self::translate(details))
    }
}
