//! CDX query-string building and plain-text response parsing.

use url::form_urlencoded;

use super::QueryOptions;

/// Builds the prefix-match query URL for `prefix`.
///
/// Only status-200 captures are requested, collapsed by URL key, with just the
/// `original` field so each response line is one URL.
pub(crate) fn query_url(opts: &QueryOptions, prefix: &str) -> String {
    format!(
        "{}?matchType=prefix&limit={}&filter=statuscode:200&collapse=urlkey&fl=original&url={}",
        opts.endpoint,
        opts.limit,
        encode_prefix(prefix)
    )
}

/// Form-URL-encodes a raw prefix (space becomes `+`, reserved bytes `%XX`).
pub(crate) fn encode_prefix(prefix: &str) -> String {
    form_urlencoded::byte_serialize(prefix.as_bytes()).collect()
}

/// Splits a response body into completions, one per non-empty line, in order.
pub(crate) fn parse_body(body: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(body)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
