//! Console rendering collaborator for the demo binary.
//!
//! Keeps an in-memory label/selection model of the tab strip and prints
//! each mutation, standing in for a real widget toolkit. Selection is
//! clamped whenever a detach would leave it past the end of the strip.

use crate::managers::tab_registry::TabView;
use crate::types::errors::RegistryError;

/// In-memory tab strip that echoes mutations to stdout.
pub struct ConsoleTabView {
    labels: Vec<String>,
    selected: usize,
}

impl ConsoleTabView {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            selected: 0,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for ConsoleTabView {
    fn default() -> Self {
        Self::new()
    }
}

impl TabView for ConsoleTabView {
    fn attach_tab(&mut self, label: &str, _content: &str) -> Result<(), RegistryError> {
        self.labels.push(label.to_string());
        println!("[tabs] + \"{}\" ({} open)", label, self.labels.len());
        Ok(())
    }

    fn detach_tab(&mut self, slot: usize) {
        if slot < self.labels.len() {
            let label = self.labels.remove(slot);
            println!("[tabs] - \"{}\" ({} open)", label, self.labels.len());
        }
        if self.selected >= self.labels.len() && self.selected > 0 {
            self.selected = self.labels.len() - 1;
        }
    }

    fn relabel_tab(&mut self, slot: usize, label: &str) -> Result<(), RegistryError> {
        match self.labels.get_mut(slot) {
            Some(entry) => {
                *entry = label.to_string();
                println!("[tabs] ~ slot {} -> \"{}\"", slot, label);
                Ok(())
            }
            None => Err(RegistryError::OutOfRange(slot)),
        }
    }

    fn set_selected(&mut self, slot: usize) {
        self.selected = slot.min(self.labels.len().saturating_sub(1));
    }

    fn selected(&self) -> usize {
        self.selected
    }
}
