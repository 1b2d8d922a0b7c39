//! rustyline glue: Tab completion from the archive index, in-memory history.

use anyhow::Result;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use wayfind_core::completion::{CompletionFetcher, Progress, Spinner};
use wayfind_core::shell::{LineSource, ReadEvent};

/// Completes the text left of the cursor with archived URLs.
pub struct ArchiveHelper {
    fetcher: CompletionFetcher,
}

impl ArchiveHelper {
    pub fn new(fetcher: CompletionFetcher) -> Self {
        Self { fetcher }
    }

    /// Candidates replace the whole line up to the cursor, so the start is 0.
    fn candidates(&self, line: &str, pos: usize, progress: &mut dyn Progress) -> (usize, Vec<String>) {
        let prefix = &line[..pos];
        let completions = self.fetcher.fetch_blocking(prefix, progress).into_completions();
        (0, completions)
    }
}

impl Completer for ArchiveHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let mut spinner = Spinner::stdout();
        Ok(self.candidates(line, pos, &mut spinner))
    }
}

impl Hinter for ArchiveHelper {
    type Hint = String;
}

impl Highlighter for ArchiveHelper {}

impl Validator for ArchiveHelper {}

impl Helper for ArchiveHelper {}

/// Line source backed by rustyline. Submitted lines go into history.
pub struct ArchiveEditor {
    editor: Editor<ArchiveHelper, DefaultHistory>,
}

impl ArchiveEditor {
    pub fn new(fetcher: CompletionFetcher) -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ArchiveHelper::new(fetcher)));
        Ok(Self { editor })
    }
}

impl LineSource for ArchiveEditor {
    fn read_line(&mut self, prompt: &str) -> ReadEvent {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    tracing::debug!("history: {}", e);
                }
                ReadEvent::Line(line)
            }
            Err(ReadlineError::Interrupted) => ReadEvent::Interrupted,
            Err(ReadlineError::Eof) => ReadEvent::Eof,
            Err(e) => ReadEvent::Failed(e.to_string()),
        }
    }
}
