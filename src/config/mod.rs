mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable overriding `tmdb.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./reelmatch.toml",
        "~/.config/reelmatch/config.toml",
        "/etc/reelmatch/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.tmdb.api_key = key.trim().to_string();
        }
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.tmdb.requests_per_second == 0 {
        anyhow::bail!("tmdb.requests_per_second cannot be 0");
    }

    if config.tmdb.timeout_secs == 0 {
        anyhow::bail!("tmdb.timeout_secs cannot be 0");
    }

    if !config.tmdb.base_url.starts_with("http://") && !config.tmdb.base_url.starts_with("https://")
    {
        anyhow::bail!("tmdb.base_url must be an http(s) URL: {}", config.tmdb.base_url);
    }

    if config.tmdb.api_key.is_empty() {
        tracing::warn!("No TMDB API key configured; set tmdb.api_key or {}", API_KEY_ENV);
    }

    Ok(())
}
