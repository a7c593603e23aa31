use async_trait::async_trait;
use reelmatch_common::MediaType;

use super::{year_of, MediaDetails, MediaTranslator};
use crate::metadata::provider::{non_empty, CrewMember, MovieDetails};
use crate::metadata::{MetadataProvider, SearchHit};

const TOP_BILLED: usize = 3;

pub struct MovieTranslator;

impl MovieTranslator {
    /// Map a movie record with credits onto [`MediaDetails`].
    pub fn translate(details: MovieDetails) -> MediaDetails {
        let crew = &details.credits.crew;
        let actors: Vec<&str> = details
            .credits
            .cast
            .iter()
            .take(TOP_BILLED)
            .map(|c| c.name.as_str())
            .collect();

        MediaDetails {
            director: crew_with_job(crew, "Director"),
            writer: crew_with_job(crew, "Screenplay"),
            actors: actors.join(", "),
            title: details.title,
            id: details.id,
            long_plot: details.overview,
            release_date: details.release_date,
            poster_path: details.poster_path,
            backdrop_path: details.backdrop_path,
            budget: details.budget,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            imdb_id: details.imdb_id,
        }
    }
}

fn crew_with_job(crew: &[CrewMember], job: &str) -> String {
    crew.iter()
        .filter(|c| c.job.as_deref() == Some(job))
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl MediaTranslator for MovieTranslator {
    fn media_type(&self) -> MediaType {
        MediaType::Movie
    }

    fn title<'a>(&self, hit: &'a SearchHit) -> Option<&'a str> {
        non_empty(&hit.title).or_else(|| non_empty(&hit.original_title))
    }

    fn release_year(&self, hit: &SearchHit) -> Option<u32> {
        year_of(non_empty(&hit.release_date))
    }

    async fn details(
        &self,
        provider: &dyn MetadataProvider,
        id: u64,
    ) -> anyhow::Result<MediaDetails> {
        let details = provider.movie_details(id).await?;
        Ok(Self::translate(details))
    }
}
