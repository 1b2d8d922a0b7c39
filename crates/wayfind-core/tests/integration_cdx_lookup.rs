//! Integration test: CDX client and completion fetcher against a local stub
//! endpoint.

mod common;

use std::sync::Arc;

use tokio::runtime::Handle;
use url::form_urlencoded;
use wayfind_core::cdx::{ArchiveQuery, CdxClient, FailureKind, FetchError, Lookup, QueryOptions};
use wayfind_core::completion::{CompletionFetcher, FetchOutcome, PollSettings, Silent};

fn client_for(endpoint: &str) -> CdxClient {
    CdxClient::new(QueryOptions {
        endpoint: endpoint.to_string(),
        ..QueryOptions::default()
    })
}

fn query_param(target: &str, name: &str) -> Option<String> {
    let query = target.split_once('?')?.1;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn lines_become_completions_in_order() {
    let server = common::cdx_server::start(
        200,
        "http://example.com/a\nhttp://example.com/b\n",
    );
    let client = client_for(&server.endpoint);

    let urls = client.fetch("example.com").expect("fetch");
    assert_eq!(urls, vec!["http://example.com/a", "http://example.com/b"]);
}

#[test]
fn request_carries_prefix_match_parameters() {
    let server = common::cdx_server::start(200, "");
    let client = client_for(&server.endpoint);

    client.fetch("a b/c").expect("fetch");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let target = &requests[0];
    assert!(target.starts_with("/cdx?"));
    assert!(target.contains("url=a+b%2Fc"));
    assert_eq!(query_param(target, "url").as_deref(), Some("a b/c"));
    assert_eq!(query_param(target, "matchType").as_deref(), Some("prefix"));
    assert_eq!(query_param(target, "limit").as_deref(), Some("25"));
    assert_eq!(query_param(target, "filter").as_deref(), Some("statuscode:200"));
    assert_eq!(query_param(target, "collapse").as_deref(), Some("urlkey"));
    assert_eq!(query_param(target, "fl").as_deref(), Some("original"));
}

#[test]
fn empty_body_is_empty_lookup() {
    let server = common::cdx_server::start(200, "");
    let lookup = client_for(&server.endpoint).lookup("nosuch.example");
    assert!(matches!(lookup, Lookup::Empty));
}

#[test]
fn non_200_status_is_failure() {
    let server = common::cdx_server::start(503, "busy\n");
    let lookup = client_for(&server.endpoint).lookup("example.com");
    match lookup {
        Lookup::Failed(FetchError::Http(code)) => assert_eq!(code, 503),
        other => panic!("expected HTTP failure, got {:?}", other),
    }
}

#[test]
fn unreachable_endpoint_is_connection_failure() {
    let endpoint = common::cdx_server::closed_endpoint();
    match client_for(&endpoint).lookup("example.com") {
        Lookup::Failed(e) => assert_eq!(e.kind(), FailureKind::Connection),
        other => panic!("expected connection failure, got {:?}", other),
    }
}

#[tokio::test]
async fn completion_fetch_memoizes_server_answer() {
    let server = common::cdx_server::start(200, "http://example.com/\n");
    let fetcher = CompletionFetcher::new(
        Arc::new(client_for(&server.endpoint)),
        PollSettings::default(),
        Handle::current(),
    );

    let first = fetcher.fetch("example.com", &mut Silent).await;
    assert_eq!(first, FetchOutcome::Fresh(vec!["http://example.com/".to_string()]));
    let second = fetcher.fetch("example.com", &mut Silent).await;
    assert_eq!(second, FetchOutcome::Cached(vec!["http://example.com/".to_string()]));
    assert_eq!(server.requests().len(), 1);
}
