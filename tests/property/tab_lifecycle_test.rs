//! Property-based tests for tab registry lifecycle operations.
//!
//! For any sequence of open and close operations, every page's slot must
//! equal its position in the registry's sequence, closed pages must stay
//! gone, and the surviving pages must keep their relative order and
//! their permanent handles.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use srcviewer::managers::tab_registry::{TabRegistry, TabRegistryTrait, TabView};
use srcviewer::services::address_resolver::{AddressResolver, ResolvedAddress};
use srcviewer::services::source_fetcher::SourceFetcherTrait;
use srcviewer::types::errors::{FetchError, RegistryError};

/// Minimal view double: tracks labels and selection, never fails.
#[derive(Default)]
struct StripState {
    labels: Vec<String>,
    selected: usize,
}

struct StripView(Rc<RefCell<StripState>>);

impl TabView for StripView {
    fn attach_tab(&mut self, label: &str, _content: &str) -> Result<(), RegistryError> {
        self.0.borrow_mut().labels.push(label.to_string());
        Ok(())
    }

    fn detach_tab(&mut self, slot: usize) {
        let mut state = self.0.borrow_mut();
        if slot < state.labels.len() {
            state.labels.remove(slot);
        }
        if state.selected >= state.labels.len() && state.selected > 0 {
            state.selected = state.labels.len() - 1;
        }
    }

    fn relabel_tab(&mut self, slot: usize, label: &str) -> Result<(), RegistryError> {
        let mut state = self.0.borrow_mut();
        if slot >= state.labels.len() {
            return Err(RegistryError::OutOfRange(slot));
        }
        state.labels[slot] = label.to_string();
        Ok(())
    }

    fn set_selected(&mut self, slot: usize) {
        self.0.borrow_mut().selected = slot;
    }

    fn selected(&self) -> usize {
        self.0.borrow().selected
    }
}

struct NoopFetcher;

impl SourceFetcherTrait for NoopFetcher {
    fn fetch(&self, _address: &ResolvedAddress) -> Result<String, FetchError> {
        Ok("source".to_string())
    }
}

fn fresh_registry() -> (TabRegistry, Rc<RefCell<StripState>>) {
    let state = Rc::new(RefCell::new(StripState::default()));
    let view = StripView(state.clone());
    (
        TabRegistry::new(
            Box::new(view),
            AddressResolver::default(),
            Box::new(NoopFetcher),
            "New Tab",
        ),
        state,
    )
}

/// Operations that can be performed on the registry.
#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize), // index into the current sequence to pick which tab to close
}

/// Strategy for a sequence of tab operations, biased toward more opens
/// than closes to keep interesting state.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            2 => (0..20usize).prop_map(TabOp::Close),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // For any op sequence, after every single operation each remaining
    // page reports a slot equal to its position, and the view's label
    // strip stays in lockstep with the page sequence.
    #[test]
    fn slot_always_equals_position(ops in arb_tab_ops()) {
        let (mut registry, state) = fresh_registry();
        let mut open_count: usize = 0;

        for (n, op) in ops.iter().enumerate() {
            match op {
                TabOp::Open => {
                    registry.open_tab(&format!("tab-{}", n), "").unwrap();
                    open_count += 1;
                }
                TabOp::Close(idx) => {
                    if open_count == 0 {
                        continue;
                    }
                    let pick = idx % open_count;
                    registry.close_tab(pick).unwrap();
                    open_count -= 1;
                }
            }

            prop_assert_eq!(registry.page_count(), open_count);
            prop_assert_eq!(state.borrow().labels.len(), open_count);
            for i in 0..registry.page_count() {
                prop_assert_eq!(
                    registry.get_page(i).unwrap().slot(),
                    i,
                    "after {:?} (op #{}) page at position {} has a stale slot",
                    op, n, i
                );
            }
        }
    }

    // Closing slot k removes exactly that page; every page formerly
    // after k slides one position down, keeping relative order and
    // permanent handles.
    #[test]
    fn close_shifts_later_pages_down(
        prefill in 2..12usize,
        pick in 0..12usize,
    ) {
        let (mut registry, _state) = fresh_registry();
        for n in 0..prefill {
            registry.open_tab(&format!("tab-{}", n), "").unwrap();
        }
        let k = pick % prefill;

        let handles: Vec<String> = (0..registry.page_count())
            .map(|i| registry.get_page(i).unwrap().handle().to_string())
            .collect();

        registry.close_tab(k).unwrap();

        prop_assert_eq!(registry.page_count(), prefill - 1);
        prop_assert!(registry.get_page_by_handle(&handles[k]).is_none());

        let mut expected = handles.clone();
        expected.remove(k);
        for (i, handle) in expected.iter().enumerate() {
            let page = registry.get_page(i).unwrap();
            prop_assert_eq!(page.handle(), handle.as_str());
            prop_assert_eq!(page.slot(), i);
        }
    }
}
