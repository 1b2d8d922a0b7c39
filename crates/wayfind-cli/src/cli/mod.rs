//! CLI for wayfind: a single interactive prompt, no subcommands.

mod editor;

use anyhow::{Context, Result};
use clap::Parser;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};
use wayfind_core::cdx::{ArchiveQuery, CdxClient};
use wayfind_core::completion::CompletionFetcher;
use wayfind_core::config::{self, WayfindConfig};
use wayfind_core::opener::PlatformOpener;
use wayfind_core::shell::{Shell, Termination};

use editor::ArchiveEditor;

/// Type a URL prefix, Tab to complete from the Wayback Machine index, Enter
/// to open the first archived match in your browser.
#[derive(Debug, Parser)]
#[command(name = "wayfind", version)]
#[command(about = "Open Wayback Machine captures for a typed URL prefix", long_about = None)]
pub struct Cli {}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let runtime = Handle::current();
        let termination = tokio::task::spawn_blocking(move || run_prompt(&cfg, runtime))
            .await
            .context("prompt task join")??;

        match termination {
            Termination::Interrupted | Termination::EndOfInput => Ok(()),
            Termination::ReadError(reason) => anyhow::bail!("reading input: {}", reason),
        }
    }
}

/// Drives `fut` to completion, then shuts `runtime` down without waiting on
/// blocking tasks. Completion lookups that timed out are still running there
/// and may never return.
pub fn block_on_detached<F: Future>(runtime: Runtime, fut: F) -> F::Output {
    let output = runtime.block_on(fut);
    runtime.shutdown_background();
    output
}

/// Runs the prompt loop on the current (blocking) thread.
fn run_prompt(cfg: &WayfindConfig, runtime: Handle) -> Result<Termination> {
    let query: Arc<dyn ArchiveQuery> = Arc::new(CdxClient::new(cfg.query_options()));
    let fetcher = CompletionFetcher::new(Arc::clone(&query), cfg.poll_settings(), runtime);
    let opener = PlatformOpener::detect();
    if let PlatformOpener::Unsupported(os) = &opener {
        tracing::warn!("no browser opener for platform {}; matches will only be logged", os);
    }

    let shell = Shell::new(query, Box::new(opener), cfg.replay_prefix.clone());
    let mut editor = ArchiveEditor::new(fetcher)?;
    Ok(shell.run(&mut editor))
}
