//! Logging init: plain-text diagnostics on stderr.
//!
//! The prompt is interactive, so "no match" and opener failures have to land
//! on the terminal rather than in a state-dir file.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize logging to stderr. `RUST_LOG` overrides the default `info` filter.
///
/// Returns Err if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging init: {}", e))?;

    tracing::debug!("wayfind logging initialized");
    Ok(())
}
