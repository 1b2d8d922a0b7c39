//! Memoized, time-bounded completion lookups for interactive Tab completion.
//!
//! A memo hit answers immediately. A miss launches the lookup on a tokio
//! blocking task and waits for it for at most `attempts × interval`, drawing
//! one progress frame before each interval. On timeout the task is detached, not
//! cancelled: it stores its result in the memo when it finally succeeds, so
//! the next Tab on the same prefix is instant.

mod memo;
mod spinner;

pub use memo::MemoTable;
pub use spinner::{Progress, Silent, Spinner};

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::cdx::{ArchiveQuery, Lookup};

/// How long a completion request waits for its lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Number of intervals to wait before giving up.
    pub attempts: u32,
    /// Length of one interval (one spinner frame).
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            attempts: 30,
            interval: Duration::from_millis(100),
        }
    }
}

impl PollSettings {
    /// Total wait before a request reports [`FetchOutcome::Pending`].
    pub fn ceiling(&self) -> Duration {
        self.interval.saturating_mul(self.attempts)
    }
}

/// Result of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Served from the memo table; no lookup was issued.
    Cached(Vec<String>),
    /// Lookup finished within the ceiling. Empty on no match or failure.
    Fresh(Vec<String>),
    /// Lookup still running when the ceiling expired.
    Pending,
}

impl FetchOutcome {
    /// Completion candidates; `Pending` has none yet.
    pub fn into_completions(self) -> Vec<String> {
        match self {
            FetchOutcome::Cached(urls) | FetchOutcome::Fresh(urls) => urls,
            FetchOutcome::Pending => Vec::new(),
        }
    }
}

/// Completion source: memo table in front of an [`ArchiveQuery`].
pub struct CompletionFetcher {
    query: Arc<dyn ArchiveQuery>,
    memo: MemoTable,
    poll: PollSettings,
    runtime: Handle,
}

impl CompletionFetcher {
    /// Lookups are spawned on `runtime`'s blocking pool.
    pub fn new(query: Arc<dyn ArchiveQuery>, poll: PollSettings, runtime: Handle) -> Self {
        Self {
            query,
            memo: MemoTable::new(),
            poll,
            runtime,
        }
    }

    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Best known completions for `prefix`, waiting at most the poll ceiling.
    pub async fn fetch(&self, prefix: &str, progress: &mut dyn Progress) -> FetchOutcome {
        if let Some(cached) = self.memo.get(prefix) {
            tracing::debug!(prefix, "completion memo hit");
            return FetchOutcome::Cached(cached);
        }

        let mut task = self.spawn_lookup(prefix);

        progress.begin();
        let outcome = self.wait_for(prefix, &mut task, progress).await;
        progress.finish();

        outcome
    }

    /// Synchronous wrapper for callers outside the runtime (e.g. a line
    /// editor callback on a `spawn_blocking` thread).
    ///
    /// Panics if called from within an async execution context.
    pub fn fetch_blocking(&self, prefix: &str, progress: &mut dyn Progress) -> FetchOutcome {
        self.runtime.block_on(self.fetch(prefix, progress))
    }

    /// The spawned task writes successful results into the memo itself, so a
    /// detached task still populates it.
    fn spawn_lookup(&self, prefix: &str) -> JoinHandle<Lookup> {
        let query = Arc::clone(&self.query);
        let memo = self.memo.clone();
        let key = prefix.to_string();
        self.runtime.spawn_blocking(move || {
            let lookup = query.lookup(&key);
            if let Lookup::Matches(urls) = &lookup {
                memo.insert(key, urls.clone());
            }
            lookup
        })
    }

    async fn wait_for(
        &self,
        prefix: &str,
        task: &mut JoinHandle<Lookup>,
        progress: &mut dyn Progress,
    ) -> FetchOutcome {
        for _ in 0..self.poll.attempts {
            // Frame first so the glyph shows before the first wait.
            progress.tick();
            tokio::select! {
                joined = &mut *task => {
                    return match joined {
                        Ok(lookup) => FetchOutcome::Fresh(lookup.into_completions()),
                        Err(e) => {
                            tracing::warn!(prefix, "completion lookup task failed: {}", e);
                            FetchOutcome::Fresh(Vec::new())
                        }
                    };
                }
                _ = tokio::time::sleep(self.poll.interval) => {}
            }
        }

        // Dropping the handle detaches the blocking task; it keeps running.
        tracing::debug!(
            prefix,
            ceiling_ms = self.poll.ceiling().as_millis() as u64,
            "completion lookup still running; giving up for now"
        );
        FetchOutcome::Pending
    }
}
