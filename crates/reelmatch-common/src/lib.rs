//! Reelmatch-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across reelmatch:
//!
//! - **Error Handling**: The matching error taxonomy and a result alias
//! - **Core Types**: The [`MediaType`] tag selecting movie or TV behaviour
//! - **Path Utilities**: Video file detection and basename extraction
//!
//! # Examples
//!
//! ```
//! use reelmatch_common::{Error, MediaType, Result};
//! use reelmatch_common::paths::is_video_file;
//! use std::path::Path;
//!
//! let media_type: MediaType = "tv".parse().unwrap();
//! assert_eq!(media_type, MediaType::Tv);
//!
//! assert!(is_video_file(Path::new("movie.mkv")));
//!
//! fn example() -> Result<()> {
//!     Err(Error::NoMatch)
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
