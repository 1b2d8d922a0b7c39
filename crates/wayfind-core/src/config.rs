use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cdx::QueryOptions;
use crate::completion::PollSettings;

/// Default CDX search endpoint of the Wayback Machine.
pub const DEFAULT_CDX_ENDPOINT: &str = "http://web.archive.org/cdx/search/cdx";
/// Default prefix prepended to a matched original URL to get its replay page.
pub const DEFAULT_REPLAY_PREFIX: &str = "http://web.archive.org/web/";

/// Bounded wait used by Tab completion (optional `[completion]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Number of spinner ticks to wait for a lookup before giving up.
    pub poll_attempts: u32,
    /// Milliseconds between spinner ticks.
    pub poll_interval_ms: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            poll_attempts: 30,
            poll_interval_ms: 100,
        }
    }
}

/// Global configuration, optionally loaded from `~/.config/wayfind/config.toml`.
///
/// Every field has a default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfindConfig {
    /// CDX search endpoint, without query string.
    pub cdx_endpoint: String,
    /// Prefix for the browser URL; the first match is appended verbatim.
    pub replay_prefix: String,
    /// Maximum rows requested per lookup.
    pub limit: u32,
    /// Optional connect timeout for CDX requests (None = libcurl default).
    /// The transfer itself is never time-limited.
    pub connect_timeout_secs: Option<u64>,
    pub completion: CompletionConfig,
}

impl Default for WayfindConfig {
    fn default() -> Self {
        Self {
            cdx_endpoint: DEFAULT_CDX_ENDPOINT.to_string(),
            replay_prefix: DEFAULT_REPLAY_PREFIX.to_string(),
            limit: 25,
            connect_timeout_secs: None,
            completion: CompletionConfig::default(),
        }
    }
}

impl WayfindConfig {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            endpoint: self.cdx_endpoint.clone(),
            limit: self.limit,
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            attempts: self.completion.poll_attempts,
            interval: Duration::from_millis(self.completion.poll_interval_ms),
        }
    }
}

/// Location of an existing config file, if the user created one.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wayfind")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults.
///
/// Nothing is written to disk when the file is missing.
pub fn load() -> Result<WayfindConfig> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => Ok(WayfindConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<WayfindConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: WayfindConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
