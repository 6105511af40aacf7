use serde::{Deserialize, Serialize};

/// Lifecycle of a page as seen by its owning registry.
///
/// A page enters `Closing` only via a close request; removal from the
/// registry is terminal and its slot becomes permanently invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    Open,
    Closing,
}

/// Serializable view of one open tab's logical state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Permanent opaque handle, stable for the page's lifetime.
    pub handle: String,
    /// Current zero-based position among open tabs. Not stable: it is
    /// reassigned whenever a lower-indexed tab closes.
    pub slot: usize,
    pub title: String,
    /// The raw address as last submitted; empty until the first submit.
    pub address: String,
    /// The resolved form of the address, once a submit has succeeded.
    pub resolved: Option<String>,
    pub state: PageState,
}
