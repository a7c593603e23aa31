use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key. `TMDB_API_KEY` in the environment takes precedence.
    #[serde(default)]
    pub api_key: String,

    /// ISO-639-1 language tag sent with every request
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Prefix for image paths (`/abc.jpg`); the `original` size is appended
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Client-side request budget
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_requests_per_second() -> u32 {
    4
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl TmdbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Pause before repeating a search the provider rate-limited (HTTP 429)
    #[serde(default = "default_backoff")]
    pub rate_limit_backoff_secs: u64,

    #[serde(default)]
    pub distance: DistanceMode,

    /// Only treat tokens dropped during reduction as years when they fall in
    /// 1900..=2100
    #[serde(default)]
    pub validate_reduced_year: bool,
}

fn default_backoff() -> u64 {
    10
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            rate_limit_backoff_secs: default_backoff(),
            distance: DistanceMode::default(),
            validate_reduced_year: false,
        }
    }
}

impl MatchingConfig {
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_secs(self.rate_limit_backoff_secs)
    }
}

/// How a candidate title is compared with the filename.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Edit distance between the title and its best-matching substring of
    /// the filename.
    #[default]
    Substring,
    /// Plain Levenshtein distance between the whole strings.
    Full,
}
