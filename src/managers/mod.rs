// Source viewer state managers.
// Managers hold the stateful core: the page entity and the tab registry that owns it.

pub mod page;
pub mod tab_registry;
