//! Per-panel expanded/collapsed state.

use std::collections::HashMap;

/// Keyed expanded-state store. Absent keys read as collapsed; entries exist
/// only for panels that have been toggled at least once. Each entry is an
/// independent cell: mutating one never touches another.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    expanded: HashMap<String, bool>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is expanded. Absence and `false` are equivalent.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, expanded: bool) {
        self.expanded.insert(key.to_string(), expanded);
    }

    /// Flip one panel's flag and return the new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.expanded.insert(key.to_string(), next);
        next
    }

    /// Keys that have an entry, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.keys().map(String::as_str)
    }
}
