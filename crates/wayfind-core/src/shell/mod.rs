//! Prompt loop: read a line, look it up fresh, open the first match.
//!
//! The line editor is abstracted behind [`LineSource`] so the loop can be
//! driven by `rustyline` in the binary and by scripted input in tests.
//! Submission lookups never consult the completion memo.

use std::sync::Arc;

use crate::cdx::{ArchiveQuery, Lookup};
use crate::opener::{OpenError, UrlOpener};

/// Prompt shown for every line.
pub const PROMPT: &str = "> ";

/// One result from the line editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A submitted line (already added to history by the source).
    Line(String),
    /// User pressed Ctrl-C.
    Interrupted,
    /// End of input (Ctrl-D or closed stdin).
    Eof,
    /// Any other editor failure.
    Failed(String),
}

pub trait LineSource {
    /// Blocks until the user submits a line or the editor stops.
    fn read_line(&mut self, prompt: &str) -> ReadEvent;
}

/// Why the loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Interrupted,
    EndOfInput,
    ReadError(String),
}

/// What happened to one submitted line.
#[derive(Debug)]
pub enum Submission {
    /// Blank line; nothing looked up.
    Skipped,
    /// Browser opener ran for this replay URL.
    Opened(String),
    /// No archived page (or the index could not be reached).
    NoMatch,
    /// A match was found but the opener failed.
    OpenFailed { url: String, error: OpenError },
}

pub struct Shell {
    query: Arc<dyn ArchiveQuery>,
    opener: Box<dyn UrlOpener>,
    replay_prefix: String,
}

impl Shell {
    pub fn new(
        query: Arc<dyn ArchiveQuery>,
        opener: Box<dyn UrlOpener>,
        replay_prefix: impl Into<String>,
    ) -> Self {
        Self {
            query,
            opener,
            replay_prefix: replay_prefix.into(),
        }
    }

    /// Replay page for an archived original URL.
    pub fn archive_url(&self, original: &str) -> String {
        format!("{}{}", self.replay_prefix, original)
    }

    /// Handles one submitted line. Never fatal.
    pub fn submit(&self, line: &str) -> Submission {
        if line.trim().is_empty() {
            tracing::info!("nothing to look up");
            return Submission::Skipped;
        }

        let lookup = self.query.lookup(line);
        if let Lookup::Failed(e) = &lookup {
            tracing::debug!(prefix = line, "treating failed lookup as no match: {}", e);
        }

        let Some(first) = lookup.first() else {
            tracing::info!("could not find a page matching that url");
            return Submission::NoMatch;
        };

        let url = self.archive_url(first);
        tracing::info!("opening {:?}", url);

        match self.opener.open(&url) {
            Ok(()) => Submission::Opened(url),
            Err(error) => {
                tracing::warn!("failed to open page in browser: {}", error);
                Submission::OpenFailed { url, error }
            }
        }
    }

    /// Runs until the line source is interrupted, exhausted, or fails.
    pub fn run(&self, input: &mut dyn LineSource) -> Termination {
        loop {
            match input.read_line(PROMPT) {
                ReadEvent::Line(line) => {
                    self.submit(&line);
                }
                ReadEvent::Interrupted => {
                    tracing::info!("aborted");
                    return Termination::Interrupted;
                }
                ReadEvent::Eof => {
                    tracing::info!("end of input");
                    return Termination::EndOfInput;
                }
                ReadEvent::Failed(reason) => {
                    tracing::error!("error reading line: {}", reason);
                    return Termination::ReadError(reason);
                }
            }
        }
    }
}
