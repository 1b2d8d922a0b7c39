//! Wayback Machine CDX index lookups.
//!
//! Uses the curl crate (libcurl) to run one prefix-match GET per lookup and
//! turns the plain-text response (one original URL per line) into an ordered
//! completion list.

mod error;
mod parse;

pub use error::{FailureKind, FetchError};

use std::time::Duration;

use crate::config::DEFAULT_CDX_ENDPOINT;

/// Outcome of one lookup, keeping "nothing archived" apart from "could not ask".
#[derive(Debug)]
pub enum Lookup {
    /// At least one archived original URL, in server order.
    Matches(Vec<String>),
    /// The index answered but had nothing for this prefix.
    Empty,
    /// Transport error or non-200 response.
    Failed(FetchError),
}

impl Lookup {
    pub fn from_completions(urls: Vec<String>) -> Self {
        if urls.is_empty() {
            Lookup::Empty
        } else {
            Lookup::Matches(urls)
        }
    }

    /// Collapses to the plain list; `Empty` and `Failed` both become `[]`.
    pub fn into_completions(self) -> Vec<String> {
        match self {
            Lookup::Matches(urls) => urls,
            Lookup::Empty | Lookup::Failed(_) => Vec::new(),
        }
    }

    /// Best match, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Lookup::Matches(urls) => urls.first().map(String::as_str),
            Lookup::Empty | Lookup::Failed(_) => None,
        }
    }
}

/// Anything that can answer "which archived URLs start with this prefix".
///
/// Implementations block; call from `spawn_blocking` when used from async code.
pub trait ArchiveQuery: Send + Sync {
    fn lookup(&self, prefix: &str) -> Lookup;
}

/// Request parameters for [`CdxClient`].
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Search endpoint without query string.
    pub endpoint: String,
    /// Maximum number of rows requested.
    pub limit: u32,
    /// Connect timeout; the transfer itself is never time-limited.
    pub connect_timeout: Option<Duration>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CDX_ENDPOINT.to_string(),
            limit: 25,
            connect_timeout: None,
        }
    }
}

/// Blocking CDX client backed by a fresh curl handle per request.
#[derive(Debug, Clone, Default)]
pub struct CdxClient {
    opts: QueryOptions,
}

impl CdxClient {
    pub fn new(opts: QueryOptions) -> Self {
        Self { opts }
    }

    /// Full request URL for `prefix`.
    pub fn query_url(&self, prefix: &str) -> String {
        parse::query_url(&self.opts, prefix)
    }

    /// Runs the GET and parses the body. Follows redirects.
    pub fn fetch(&self, prefix: &str) -> Result<Vec<String>, FetchError> {
        let url = self.query_url(prefix);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        if let Some(timeout) = self.opts.connect_timeout {
            easy.connect_timeout(timeout)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code != 200 {
            return Err(FetchError::Http(code));
        }

        Ok(parse::parse_body(&body))
    }
}

impl ArchiveQuery for CdxClient {
    fn lookup(&self, prefix: &str) -> Lookup {
        match self.fetch(prefix) {
            Ok(urls) => {
                tracing::debug!(prefix, matches = urls.len(), "cdx lookup");
                Lookup::from_completions(urls)
            }
            Err(e) => {
                tracing::warn!(prefix, kind = ?e.kind(), "cdx lookup failed: {}", e);
                Lookup::Failed(e)
            }
        }
    }
}
