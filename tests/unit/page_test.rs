use std::sync::mpsc::channel;

use srcviewer::managers::page::Page;
use srcviewer::services::address_resolver::{AddressResolver, ResolvedAddress};
use srcviewer::services::source_fetcher::SourceFetcherTrait;
use srcviewer::types::errors::{FetchError, PageError};
use srcviewer::types::notification::{PageEvent, PageEventKind};
use srcviewer::types::page::PageState;

/// Fetcher returning a fixed body.
struct FixedFetcher(&'static str);

impl SourceFetcherTrait for FixedFetcher {
    fn fetch(&self, _address: &ResolvedAddress) -> Result<String, FetchError> {
        Ok(self.0.to_string())
    }
}

/// Fetcher that always fails with a network error.
struct FailingFetcher;

impl SourceFetcherTrait for FailingFetcher {
    fn fetch(&self, _address: &ResolvedAddress) -> Result<String, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

#[test]
fn test_new_page_starts_open_with_blank_address() {
    let (tx, _rx) = channel();
    let page = Page::new("New Tab", "", tx);
    assert_eq!(page.title(), "New Tab");
    assert_eq!(page.address(), "");
    assert!(page.resolved().is_none());
    assert_eq!(page.state(), PageState::Open);
    assert_eq!(page.slot(), 0);
}

#[test]
fn test_handles_are_unique() {
    let (tx, _rx) = channel();
    let a = Page::new("a", "", tx.clone());
    let b = Page::new("b", "", tx);
    assert_ne!(a.handle(), b.handle());
}

#[test]
fn test_submit_success_adopts_resolved_address_and_emits() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);
    let resolver = AddressResolver::default();

    let source = page
        .submit("example.com", &resolver, &FixedFetcher("<html></html>"))
        .unwrap();

    assert_eq!(source, "<html></html>");
    assert_eq!(page.address(), "http://example.com/");
    assert_eq!(page.title(), "http://example.com/");
    assert_eq!(page.resolved().unwrap().as_str(), "http://example.com/");
    assert_eq!(
        rx.try_recv().unwrap(),
        PageEvent {
            slot: 0,
            kind: PageEventKind::TitleChanged
        }
    );
    assert!(rx.try_recv().is_err(), "exactly one event per submit");
}

#[test]
fn test_submit_invalid_address_leaves_state_untouched() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);
    let resolver = AddressResolver::default();

    let result = page.submit("http://exa mple", &resolver, &FixedFetcher("body"));

    assert!(matches!(result, Err(PageError::InvalidAddress(_))));
    assert_eq!(page.title(), "New Tab");
    assert_eq!(page.address(), "");
    assert!(page.resolved().is_none());
    assert!(rx.try_recv().is_err(), "no event on failed submit");
}

#[test]
fn test_submit_fetch_failure_leaves_state_untouched() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);
    let resolver = AddressResolver::default();

    let result = page.submit("example.com", &resolver, &FailingFetcher);

    match result {
        Err(PageError::LoadFailed(address)) => assert_eq!(address, "http://example.com/"),
        other => panic!("expected LoadFailed, got {:?}", other.err()),
    }
    assert_eq!(page.title(), "New Tab");
    assert_eq!(page.address(), "");
    assert!(rx.try_recv().is_err());
}

/// An empty body is a fetch failure from the page's point of view, not
/// a successful navigation.
#[test]
fn test_submit_empty_body_is_a_load_failure() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);
    let resolver = AddressResolver::default();

    let result = page.submit("example.com", &resolver, &FixedFetcher(""));

    assert!(matches!(result, Err(PageError::LoadFailed(_))));
    assert_eq!(page.title(), "New Tab");
    assert_eq!(page.address(), "");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_set_title_emits_title_changed() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);

    page.set_title("renamed");

    assert_eq!(page.title(), "renamed");
    assert_eq!(
        rx.try_recv().unwrap(),
        PageEvent {
            slot: 0,
            kind: PageEventKind::TitleChanged
        }
    );
}

#[test]
fn test_request_close_emits_without_mutating_content() {
    let (tx, rx) = channel();
    let mut page = Page::new("New Tab", "", tx);

    page.request_close();

    assert_eq!(page.title(), "New Tab");
    assert_eq!(page.address(), "");
    assert_eq!(page.state(), PageState::Closing);
    assert_eq!(
        rx.try_recv().unwrap(),
        PageEvent {
            slot: 0,
            kind: PageEventKind::CloseRequested
        }
    );
}

#[test]
fn test_emitting_without_a_receiver_does_not_panic() {
    let (tx, rx) = channel();
    let mut page = Page::new("orphan", "", tx);
    drop(rx);

    page.set_title("still fine");
    page.request_close();
}

#[test]
fn test_snapshot_reflects_current_state() {
    let (tx, _rx) = channel();
    let mut page = Page::new("New Tab", "", tx);
    let resolver = AddressResolver::default();
    page.submit("example.com", &resolver, &FixedFetcher("x"))
        .unwrap();

    let snapshot = page.snapshot();
    assert_eq!(snapshot.handle, page.handle());
    assert_eq!(snapshot.slot, 0);
    assert_eq!(snapshot.title, "http://example.com/");
    assert_eq!(snapshot.address, "http://example.com/");
    assert_eq!(snapshot.resolved.as_deref(), Some("http://example.com/"));
    assert_eq!(snapshot.state, PageState::Open);
}
