//! # reelmatch-parser
//!
//! Pure, provider-independent filename handling for reelmatch.
//!
//! - [`sanitize`] turns a noisy filename into a [`SearchTerm`] with release
//!   markers (resolution, source, codec tags) removed.
//! - [`reduce`] drops one token from either end of a term, reading the dropped
//!   token as a candidate year.
//! - [`normalize`] produces the comparable form used when scoring titles.
//! - [`parse_episode`] extracts season/episode numbers.
//!
//! ## Quick Start
//!
//! ```
//! use reelmatch_parser::{parse_episode, reduce, sanitize, Direction};
//!
//! let term = sanitize("Movie.Title.2020.1080p.BluRay.x264.mkv").unwrap();
//! assert_eq!(term.tokens(), ["Movie", "Title", "2020"]);
//! assert_eq!(term.to_string(), "Movie+Title+2020");
//!
//! let reduced = reduce(&term, Direction::Backward);
//! assert_eq!(reduced.term.unwrap().to_string(), "Movie+Title");
//! assert_eq!(reduced.year, Some(2020));
//!
//! let episode = parse_episode("Game.of.Thrones.S03E09.HDTV.x264-EVOLVE.mp4").unwrap();
//! assert_eq!((episode.season_number, episode.episode_number), (3, 9));
//! ```

pub mod episode;
pub mod normalize;
pub mod reduce;
pub mod term;

pub use episode::{parse_episode, parse_episode_with_pattern, EpisodeDescriptor, EpisodePattern};
pub use normalize::normalize;
pub use reduce::{reduce, Direction, Reduction};
pub use term::{is_noise_token, sanitize, SearchTerm, SEPARATOR};
