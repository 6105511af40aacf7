//! Page entity for the source viewer.
//!
//! A page holds one open tab's logical state: its permanent handle, its
//! current positional slot, a display title, and the last submitted
//! address. State changes are reported to the single observer channel
//! fixed at creation time (the owning registry).

use std::sync::mpsc::Sender;

use uuid::Uuid;

use crate::services::address_resolver::{AddressResolverTrait, ResolvedAddress};
use crate::services::source_fetcher::SourceFetcherTrait;
use crate::types::errors::PageError;
use crate::types::notification::{PageEvent, PageEventKind};
use crate::types::page::{PageSnapshot, PageState};

/// One open tab's logical state and its event emissions.
pub struct Page {
    handle: String,
    slot: usize,
    title: String,
    address: String,
    resolved: Option<ResolvedAddress>,
    state: PageState,
    events: Sender<PageEvent>,
}

impl Page {
    /// Creates a page reporting to the given event channel. The channel
    /// is the page's only observer and is fixed for its lifetime. The
    /// initial address is stored as given, unresolved.
    pub fn new(title: &str, initial_address: &str, events: Sender<PageEvent>) -> Self {
        Self {
            handle: Uuid::new_v4().to_string(),
            slot: 0,
            title: title.to_string(),
            address: initial_address.to_string(),
            resolved: None,
            state: PageState::Open,
            events,
        }
    }

    /// Permanent opaque handle, stable for the page's lifetime.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Current positional slot among open tabs.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn resolved(&self) -> Option<&ResolvedAddress> {
        self.resolved.as_ref()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Reassigns the positional slot during registry reindexing.
    /// Silent bookkeeping: never emits an event.
    pub(crate) fn set_slot(&mut self, slot: usize) {
        self.slot = slot;
    }

    /// Sets the display title and notifies the observer.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.emit(PageEventKind::TitleChanged);
    }

    /// Submits a raw address: resolves it, fetches its source, then
    /// adopts the resolved address string as the page's address and
    /// title, notifying the observer.
    ///
    /// On any failure (resolution, fetch, or a fetched-but-empty body)
    /// the page state is left untouched and the error names the failing
    /// stage. Returns the fetched source text for display.
    pub fn submit(
        &mut self,
        raw: &str,
        resolver: &dyn AddressResolverTrait,
        fetcher: &dyn SourceFetcherTrait,
    ) -> Result<String, PageError> {
        let resolved = resolver.resolve(raw).map_err(PageError::InvalidAddress)?;

        let source = fetcher.fetch(&resolved).map_err(|e| {
            log::debug!("fetch failed for {}: {}", resolved, e);
            PageError::LoadFailed(resolved.to_string())
        })?;
        if source.is_empty() {
            return Err(PageError::LoadFailed(resolved.to_string()));
        }

        self.address = resolved.as_str().to_string();
        self.title = resolved.as_str().to_string();
        self.resolved = Some(resolved);
        self.emit(PageEventKind::TitleChanged);
        Ok(source)
    }

    /// Requests that this page be closed. Own state is not mutated
    /// beyond the lifecycle marker; removal is the registry's job.
    pub fn request_close(&mut self) {
        self.state = PageState::Closing;
        self.emit(PageEventKind::CloseRequested);
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            handle: self.handle.clone(),
            slot: self.slot,
            title: self.title.clone(),
            address: self.address.clone(),
            resolved: self.resolved.as_ref().map(|r| r.as_str().to_string()),
            state: self.state,
        }
    }

    fn emit(&self, kind: PageEventKind) {
        // The receiver lives as long as the owning registry; a failed
        // send means the registry is already gone.
        let _ = self.events.send(PageEvent {
            slot: self.slot,
            kind,
        });
    }
}
