//! Episode descriptor parser.
//!
//! Extracts season and episode numbers from a filename. Patterns are tried in
//! a fixed order and the first one that matches anywhere in the input wins,
//! so `S03E09` always beats the looser digit-run heuristics.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Season/episode numbers found in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeDescriptor {
    pub season_number: u32,
    pub episode_number: u32,
}

/// The naming convention an [`EpisodeDescriptor`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodePattern {
    /// `S03E09`
    SeasonEpisode,
    /// `201`, `1205`: all digits but the last two are the season.
    DigitRun,
    /// `2x01`
    Cross,
    /// `12-05`
    Dash,
}

impl fmt::Display for EpisodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeasonEpisode => write!(f, "SxxEyy"),
            Self::DigitRun => write!(f, "digit run"),
            Self::Cross => write!(f, "NxNN"),
            Self::Dash => write!(f, "N-NN"),
        }
    }
}

// Each regex captures the season in group 1 and the episode in group 2.
static PATTERNS: LazyLock<[(EpisodePattern, Regex); 4]> = LazyLock::new(|| {
    let compile = |re: &str| Regex::new(re).expect("episode pattern is valid");
    [
        (EpisodePattern::SeasonEpisode, compile(r"(?i)S(\d{2})E(\d{2})")),
        (EpisodePattern::DigitRun, compile(r"\b(\d{1,2})(\d{2})\b")),
        (EpisodePattern::Cross, compile(r"(?i)\b(\d{1,2})x(\d{2})\b")),
        (EpisodePattern::Dash, compile(r"\b(\d{1,2})-(\d{2})\b")),
    ]
});

/// Parse season/episode numbers from `filename`.
///
/// Returns `None` when no pattern matches; that means "not a recognizable
/// episode", not a failure. Numbers are not range checked, so `S00E00`
/// yields zeros.
///
/// # Examples
///
/// ```
/// use reelmatch_parser::parse_episode;
///
/// let ep = parse_episode("madam.secretary.1205.hdtv-lol.mp4").unwrap();
/// assert_eq!((ep.season_number, ep.episode_number), (12, 5));
///
/// assert!(parse_episode("Some.Movie.mkv").is_none());
/// ```
pub fn parse_episode(filename: &str) -> Option<EpisodeDescriptor> {
    parse_episode_with_pattern(filename).map(|(_, descriptor)| descriptor)
}

/// Like [`parse_episode`], also reporting which pattern matched.
pub fn parse_episode_with_pattern(filename: &str) -> Option<(EpisodePattern, EpisodeDescriptor)> {
    PATTERNS.iter().find_map(|(pattern, regex)| {
        let caps = regex.captures(filename)?;
        let season_number = caps.get(1)?.as_str().parse().ok()?;
        let episode_number = caps.get(2)?.as_str().parse().ok()?;
        Some((
            *pattern,
            EpisodeDescriptor {
                season_number,
                episode_number,
            },
        ))
    })
}
