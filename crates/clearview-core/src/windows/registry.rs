//! Registry of windows hidden by the toggle controller.

use super::types::HiddenWindow;

/// Ordered list of windows this tool hid, in the order they were hidden.
///
/// The registry is non-empty exactly when the tool is in the hidden state.
/// It is owned by [`crate::toggle::ToggleController`]; nothing else mutates
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowRegistry {
    records: Vec<HiddenWindow>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry that already holds `records`.
    #[cfg(test)]
    pub(crate) fn with_records(records: Vec<HiddenWindow>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn push(&mut self, record: HiddenWindow) {
        self.records.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HiddenWindow> {
        self.records.iter()
    }

    /// Remove and return every record in insertion order.
    pub fn take_all(&mut self) -> Vec<HiddenWindow> {
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::types::{Pid, ProcessRef, WindowId};

    fn record(pid: u32, window: u32) -> HiddenWindow {
        HiddenWindow {
            process: ProcessRef {
                pid: Pid(pid),
                name: format!("app-{}", pid),
            },
            window: WindowId(window),
            title: String::new(),
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = WindowRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut registry = WindowRegistry::new();
        registry.push(record(20, 2));
        registry.push(record(10, 1));
        registry.push(record(30, 3));

        let windows: Vec<u32> = registry.iter().map(|r| r.window.0).collect();
        assert_eq!(windows, vec![2, 1, 3]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_take_all_empties_registry() {
        let mut registry = WindowRegistry::with_records(vec![record(1, 1), record(2, 2)]);

        let taken = registry.take_all();

        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].window, WindowId(1));
        assert_eq!(taken[1].window, WindowId(2));
        assert!(registry.is_empty());
        assert!(registry.take_all().is_empty());
    }
}
