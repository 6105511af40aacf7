//! Tab registry for the source viewer.
//!
//! Owns the ordered collection of open pages, assigns and reassigns
//! positional slots as tabs open and close in arbitrary order, and
//! reacts to page events. Display order is insertion order, the slot of
//! every page always equals its position in the sequence, and the last
//! slot is the reserved blank tab used to spawn additional tabs.
//!
//! All operations run on one logical execution context. Page events are
//! queued on the registry's channel and drained synchronously at the end
//! of each operation, so no handler ever observes a half-reindexed
//! sequence.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::managers::page::Page;
use crate::services::address_resolver::AddressResolver;
use crate::services::source_fetcher::SourceFetcherTrait;
use crate::types::errors::RegistryError;
use crate::types::notification::{PageEvent, PageEventKind};
use crate::types::page::PageSnapshot;

/// Rendering collaborator for the tab strip.
///
/// The registry drives this interface; the host feeds selection changes
/// back through [`TabRegistryTrait::on_selection_changed`].
pub trait TabView {
    fn attach_tab(&mut self, label: &str, content: &str) -> Result<(), RegistryError>;
    fn detach_tab(&mut self, slot: usize);
    fn relabel_tab(&mut self, slot: usize, label: &str) -> Result<(), RegistryError>;
    fn set_selected(&mut self, slot: usize);
    fn selected(&self) -> usize;
}

/// Trait defining the tab registry interface.
pub trait TabRegistryTrait {
    fn open_tab(&mut self, title: &str, initial_address: &str) -> Result<(), RegistryError>;
    fn create_new_tab(&mut self) -> Result<(), RegistryError>;
    fn close_tab(&mut self, slot: usize) -> Result<(), RegistryError>;
    fn relabel(&mut self, slot: usize, title: &str) -> Result<(), RegistryError>;
    fn set_page_title(&mut self, slot: usize, title: &str) -> Result<(), RegistryError>;
    fn submit(&mut self, slot: usize, raw: &str) -> Result<String, RegistryError>;
    fn request_close(&mut self, slot: usize) -> Result<(), RegistryError>;
    fn select_tab(&mut self, slot: usize);
    fn on_selection_changed(&mut self);
    fn page_count(&self) -> usize;
    fn get_page(&self, slot: usize) -> Option<&Page>;
    fn get_page_by_handle(&self, handle: &str) -> Option<&Page>;
    fn selected_slot(&self) -> usize;
    fn snapshots(&self) -> Vec<PageSnapshot>;
}

/// In-memory tab registry driving a rendering collaborator.
pub struct TabRegistry {
    pages: Vec<Page>,
    view: Box<dyn TabView>,
    resolver: AddressResolver,
    fetcher: Box<dyn SourceFetcherTrait>,
    new_tab_title: String,
    events: Sender<PageEvent>,
    inbox: Receiver<PageEvent>,
}

impl TabRegistry {
    pub fn new(
        view: Box<dyn TabView>,
        resolver: AddressResolver,
        fetcher: Box<dyn SourceFetcherTrait>,
        new_tab_title: &str,
    ) -> Self {
        let (events, inbox) = channel();
        Self {
            pages: Vec::new(),
            view,
            resolver,
            fetcher,
            new_tab_title: new_tab_title.to_string(),
            events,
            inbox,
        }
    }

    /// Drains pending page events and reacts to each, synchronously, on
    /// the calling context.
    fn pump_events(&mut self) {
        while let Ok(event) = self.inbox.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: PageEvent) {
        match event.kind {
            PageEventKind::TitleChanged => {
                let title = match self.pages.get(event.slot) {
                    Some(page) => page.title().to_string(),
                    None => {
                        log::warn!("title change event for unknown slot {}", event.slot);
                        return;
                    }
                };
                if let Err(e) = self.relabel(event.slot, &title) {
                    log::warn!("relabel after title change failed: {}", e);
                }
            }
            PageEventKind::CloseRequested => {
                if let Err(e) = self.close_tab(event.slot) {
                    log::warn!("close request for unknown slot {}: {}", event.slot, e);
                }
            }
        }
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Opens a tab: builds a page, appends it to the sequence with
    /// `slot = length - 1`, and attaches its visuals with empty content.
    /// If the rendering collaborator reports failure the append is
    /// rolled back, so the slot-equals-position invariant is preserved.
    fn open_tab(&mut self, title: &str, initial_address: &str) -> Result<(), RegistryError> {
        let mut page = Page::new(title, initial_address, self.events.clone());
        page.set_slot(self.pages.len());
        self.pages.push(page);

        if let Err(e) = self.view.attach_tab(title, "") {
            self.pages.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Promotes the current trailing blank tab to the configured default
    /// title and appends a fresh blank trailing tab after it.
    fn create_new_tab(&mut self) -> Result<(), RegistryError> {
        self.open_tab("", "")?;
        if let Some(promoted) = self.pages.len().checked_sub(2) {
            let title = self.new_tab_title.clone();
            self.set_page_title(promoted, &title)?;
        }
        Ok(())
    }

    /// Closes the tab at `slot`: reassigns every later page's slot one
    /// position down in a single pass, removes the page, pulls the
    /// selection back when the closed tab sat just before the reserved
    /// blank one, and detaches the visuals at the pre-removal index.
    fn close_tab(&mut self, slot: usize) -> Result<(), RegistryError> {
        if slot >= self.pages.len() {
            return Err(RegistryError::OutOfRange(slot));
        }

        for i in (slot + 1)..self.pages.len() {
            self.pages[i].set_slot(i - 1);
        }

        self.pages.remove(slot);

        // The closed tab sat immediately before the reserved blank one;
        // without the pull-back the selection would land on the blank tab.
        if !self.pages.is_empty() && slot == self.pages.len() - 1 {
            self.view.set_selected(slot.saturating_sub(1));
        }

        self.view.detach_tab(slot);
        Ok(())
    }

    /// Changes the display label of the tab at `slot`. Out-of-range
    /// slots fail without mutating anything.
    fn relabel(&mut self, slot: usize, title: &str) -> Result<(), RegistryError> {
        if slot >= self.pages.len() {
            return Err(RegistryError::OutOfRange(slot));
        }
        self.view.relabel_tab(slot, title)
    }

    /// Sets the stored title of the page at `slot`; the page's
    /// notification updates the tab label in turn.
    fn set_page_title(&mut self, slot: usize, title: &str) -> Result<(), RegistryError> {
        if slot >= self.pages.len() {
            return Err(RegistryError::OutOfRange(slot));
        }
        self.pages[slot].set_title(title);
        self.pump_events();
        Ok(())
    }

    /// Runs a navigation on the page at `slot` and returns the fetched
    /// source text for display.
    fn submit(&mut self, slot: usize, raw: &str) -> Result<String, RegistryError> {
        if slot >= self.pages.len() {
            return Err(RegistryError::OutOfRange(slot));
        }
        let result = self.pages[slot].submit(raw, &self.resolver, self.fetcher.as_ref());
        self.pump_events();
        result.map_err(RegistryError::Navigation)
    }

    /// Forwards a close request to the page at `slot`; the page's
    /// `CloseRequested` event drives the actual removal.
    fn request_close(&mut self, slot: usize) -> Result<(), RegistryError> {
        if slot >= self.pages.len() {
            return Err(RegistryError::OutOfRange(slot));
        }
        self.pages[slot].request_close();
        self.pump_events();
        Ok(())
    }

    /// Host-reported tab selection: moves the view's selection and then
    /// reacts to the change. Internal selection moves (the close-time
    /// pull-back) bypass this and never trigger promotion.
    fn select_tab(&mut self, slot: usize) {
        self.view.set_selected(slot);
        self.on_selection_changed();
    }

    /// Reacts to a selection change reported by the host. Selecting the
    /// reserved trailing blank tab spawns a new real tab in its place.
    fn on_selection_changed(&mut self) {
        let last = match self.pages.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };
        if self.view.selected() == last {
            if let Err(e) = self.create_new_tab() {
                log::warn!("blank tab promotion failed: {}", e);
            }
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn get_page(&self, slot: usize) -> Option<&Page> {
        self.pages.get(slot)
    }

    /// Looks a page up by its permanent handle, independent of any slot
    /// reassignment that has happened since creation.
    fn get_page_by_handle(&self, handle: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.handle() == handle)
    }

    fn selected_slot(&self) -> usize {
        self.view.selected()
    }

    fn snapshots(&self) -> Vec<PageSnapshot> {
        self.pages.iter().map(|p| p.snapshot()).collect()
    }
}
