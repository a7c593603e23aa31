//! Reelmatch - match noisy media filenames to TMDB catalog entries
//!
//! This library crate exposes the matcher, provider, and identification
//! pipeline used by the `reelmatch` binary.

pub mod config;
pub mod matching;
pub mod metadata;
pub mod scanner;
pub mod translator;
