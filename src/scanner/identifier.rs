//! Full identification of a single file.
//!
//! Resolves the filename to a catalog entry, fetches and translates its
//! details, and for TV files adds the episode parsed from the filename along
//! with the provider's record for that episode.

use std::sync::Arc;

use reelmatch_common::{paths, Error, MediaType, Result};
use reelmatch_parser::{parse_episode, EpisodeDescriptor};
use serde::Serialize;
use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::{resolve, MatchDecision, MatchQuery};
use crate::metadata::provider::GuestStar;
use crate::metadata::MetadataProvider;
use crate::translator::{translator_for, MediaDetails};

/// Identifies files against a metadata provider.
pub struct MediaIdentifier {
    provider: Arc<dyn MetadataProvider>,
    matching: MatchingConfig,
}

/// Everything known about an identified file.
#[derive(Debug, Clone, Serialize)]
pub struct Identification {
    #[serde(flatten)]
    pub decision: MatchDecision,
    #[serde(flatten)]
    pub details: MediaDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<EpisodeDetails>,
}

/// Season/episode numbers plus whatever the provider knows about the episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeDetails {
    #[serde(flatten)]
    pub descriptor: EpisodeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guest_stars: Vec<GuestStar>,
}

impl EpisodeDetails {
    fn bare(descriptor: EpisodeDescriptor) -> Self {
        Self {
            descriptor,
            name: None,
            overview: None,
            image: None,
            guest_stars: Vec::new(),
        }
    }
}

impl MediaIdentifier {
    pub fn new(provider: Arc<dyn MetadataProvider>, matching: MatchingConfig) -> Self {
        Self { provider, matching }
    }

    pub fn provider(&self) -> &dyn MetadataProvider {
        self.provider.as_ref()
    }

    /// Identify `filename` as a `media_type` entry, optionally released in
    /// `year`.
    pub async fn identify(
        &self,
        filename: &str,
        media_type: MediaType,
        year: Option<u32>,
    ) -> Result<Identification> {
        let query = MatchQuery::new(filename, media_type).with_year(year);
        let decision = resolve(self.provider(), &self.matching, &query).await?;

        let details = translator_for(media_type)
            .details(self.provider(), decision.provider_id)
            .await
            .map_err(|e| Error::provider(format!("{}: {e:#}", self.provider.name())))?;

        let episode = match media_type {
            MediaType::Tv => self.episode(filename, decision.provider_id).await?,
            MediaType::Movie => None,
        };

        Ok(Identification {
            decision,
            details,
            episode,
        })
    }

    async fn episode(&self, filename: &str, series_id: u64) -> Result<Option<EpisodeDetails>> {
        let Some(descriptor) = parse_episode(paths::file_name(filename)) else {
            debug!(filename, "No episode descriptor in filename");
            return Ok(None);
        };

        let info = self
            .provider
            .episode_info(series_id, descriptor)
            .await
            .map_err(|e| Error::provider(format!("{}: {e:#}", self.provider.name())))?;

        let Some(info) = info else {
            return Ok(Some(EpisodeDetails::bare(descriptor)));
        };

        Ok(Some(EpisodeDetails {
            descriptor,
            name: info.name,
            overview: info.overview,
            image: info
                .still_path
                .filter(|p| !p.is_empty())
                .map(|p| self.provider.image_url(&p)),
            guest_stars: info.guest_stars,
        }))
    }
}
