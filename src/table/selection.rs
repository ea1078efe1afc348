use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Row selection behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one row selected; selecting replaces the previous choice
    Single,
    /// Any number of rows selected
    Multiple,
}

/// Tracks which row indices are currently marked selected.
///
/// Owns the selection storage; the table controller only ever asks it to
/// clear after a bulk apply, and the renderer reads per-row selected state.
#[derive(Debug, Clone)]
pub struct Selection {
    mode: SelectionMode,
    selected: BTreeSet<usize>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Selection {
            mode,
            selected: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Flip selection on a row. In single mode, selecting a row drops any
    /// previously selected one.
    pub fn toggle(&mut self, index: usize) {
        if self.selected.contains(&index) {
            self.selected.remove(&index);
            return;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.insert(index);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Select every row in `0..len`. A single-select surface has no
    /// select-all control, so this is a no-op in single mode.
    pub fn select_all(&mut self, len: usize) {
        if self.mode == SelectionMode::Single {
            return;
        }
        self.selected = (0..len).collect();
    }

    /// Deselect all rows
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
