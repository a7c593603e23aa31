mod cli;

use reelmatch::{
    config,
    metadata::{MetadataProvider, TmdbProvider},
    scanner::{Identification, MediaIdentifier, Scanner},
};
use reelmatch_common::MediaType;
use reelmatch_parser::{parse_episode_with_pattern, sanitize};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelmatch=trace,reelmatch_parser=trace,reqwest=debug".to_string()
        } else {
            "reelmatch=info,reqwest=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Identify {
            file,
            media_type,
            year,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(identify_file(&file, media_type, year, json, cli.config.as_deref()))
        }
        Commands::Scan {
            dir,
            media_type,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(scan_dir(&dir, media_type, json, cli.config.as_deref()))
        }
        Commands::Episode { file } => show_episode(&file),
        Commands::Sanitize { file } => show_search_term(&file),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reelmatch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn build_identifier(config_path: Option<&Path>) -> Result<MediaIdentifier> {
    let config = config::load_config_or_default(config_path)?;
    let provider = TmdbProvider::new(&config.tmdb)?;
    if !provider.is_available() {
        anyhow::bail!(
            "No TMDB API key configured; set tmdb.api_key or {}",
            config::API_KEY_ENV
        );
    }
    tracing::debug!("Using metadata provider: {}", provider.name());
    Ok(MediaIdentifier::new(Arc::new(provider), config.matching))
}

async fn identify_file(
    file: &Path,
    media_type: MediaType,
    year: Option<u32>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let identifier = build_identifier(config_path)?;
    let filename = file.to_string_lossy();

    tracing::info!("Identifying {:?} as {}", file, media_type);
    let identification = identifier
        .identify(&filename, media_type, year)
        .await
        .with_context(|| format!("Failed to identify {:?}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&identification)?);
    } else {
        print_identification(&identification);
    }
    Ok(())
}

async fn scan_dir(
    dir: &Path,
    media_type: MediaType,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let scanner = Scanner::new(build_identifier(config_path)?);
    let entries = scanner.scan_directory(dir, media_type).await?;

    if json {
        let report: Vec<serde_json::Value> = entries
            .iter()
            .map(|entry| match &entry.result {
                Ok(identification) => serde_json::json!({
                    "path": entry.path,
                    "identification": identification,
                }),
                Err(e) => serde_json::json!({
                    "path": entry.path,
                    "error": e.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.path.display());
        match &entry.result {
            Ok(identification) => print_identification(identification),
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }
    let matched = entries.iter().filter(|e| e.result.is_ok()).count();
    println!("Identified {} of {} files", matched, entries.len());
    Ok(())
}

fn print_identification(identification: &Identification) {
    let decision = &identification.decision;
    let details = &identification.details;

    println!("  Name: {}", decision.name);
    println!("  TMDB ID: {} ({})", decision.provider_id, decision.media_type);
    println!("  Match score: {}", decision.match_score);
    println!("  Year matches: {}", decision.year_matches);
    if let Some(ref date) = details.release_date {
        println!("  Released: {}", date);
    }
    if !details.genres.is_empty() {
        println!("  Genres: {}", details.genres.join(", "));
    }
    if !details.director.is_empty() {
        println!("  Director: {}", details.director);
    }
    if !details.actors.is_empty() {
        println!("  Actors: {}", details.actors);
    }
    if let Some(ref imdb) = details.imdb_id {
        println!("  IMDb: {}", imdb);
    }
    if let Some(ref episode) = identification.episode {
        print!(
            "  Episode: S{:02}E{:02}",
            episode.descriptor.season_number, episode.descriptor.episode_number
        );
        if let Some(ref name) = episode.name {
            print!(" - {}", name);
        }
        println!();
    }
}

fn show_episode(file: &str) -> Result<()> {
    match parse_episode_with_pattern(reelmatch_common::paths::file_name(file)) {
        Some((pattern, episode)) => {
            println!("Season: {}", episode.season_number);
            println!("Episode: {}", episode.episode_number);
            println!("Pattern: {}", pattern);
            Ok(())
        }
        None => anyhow::bail!("No season/episode found in {:?}", file),
    }
}

fn show_search_term(file: &str) -> Result<()> {
    match sanitize(file) {
        Some(term) => {
            println!("{}", term);
            Ok(())
        }
        None => anyhow::bail!("No searchable words in {:?}", file),
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  TMDB base URL: {}", config.tmdb.base_url);
    println!("  Language: {}", config.tmdb.language);
    println!(
        "  API key: {}",
        if config.tmdb.api_key.is_empty() {
            "not set"
        } else {
            "set"
        }
    );
    println!("  Requests per second: {}", config.tmdb.requests_per_second);
    println!(
        "  Rate-limit backoff: {}s",
        config.matching.rate_limit_backoff_secs
    );
    println!("  Distance: {:?}", config.matching.distance);

    Ok(())
}
