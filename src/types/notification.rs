use serde::{Deserialize, Serialize};

/// A state-change notice sent from a page to its owning registry.
///
/// Carries no payload beyond the originating slot and the kind; the
/// handler queries the page itself for updated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEvent {
    /// Current positional slot of the page that emitted the event.
    pub slot: usize,
    pub kind: PageEventKind,
}

/// The closed set of changes a page reports to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEventKind {
    /// The page changed its stored title.
    TitleChanged,
    /// The page requested that it be closed.
    CloseRequested,
}
