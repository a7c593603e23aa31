use clap::{Parser, Subcommand};
use reelmatch_common::MediaType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(author, version, about = "Match media filenames to TMDB movies and TV series")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify a single file
    Identify {
        /// File to identify (only the name is used)
        #[arg(required = true)]
        file: PathBuf,

        /// Catalog to search: movie or tv
        #[arg(short = 't', long = "type", default_value = "movie")]
        media_type: MediaType,

        /// Known release year
        #[arg(short, long)]
        year: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Identify every video file under a directory
    Scan {
        /// Directory to walk
        #[arg(required = true)]
        dir: PathBuf,

        /// Catalog to search: movie or tv
        #[arg(short = 't', long = "type", default_value = "movie")]
        media_type: MediaType,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the season and episode parsed from a filename
    Episode {
        #[arg(required = true)]
        file: String,
    },

    /// Show the search term derived from a filename
    Sanitize {
        #[arg(required = true)]
        file: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
