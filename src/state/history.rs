//! Bounded undo history of full raster snapshots.

use std::collections::VecDeque;

use crate::state::surface::Snapshot;

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Oldest-first stack of snapshots. The top entry is always the state
/// currently shown on the surface.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cap: usize,
}

impl History {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: Snapshot, cap: usize) -> Self {
        let cap = cap.max(1);
        let mut entries = VecDeque::with_capacity(cap);
        entries.push_back(initial);
        Self { entries, cap }
    }

    /// Push a completed stroke, evicting the oldest entry when full.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.entries.len() == self.cap {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Drop the top entry and return the new top. `None` when only one
    /// entry is left; the history is untouched in that case.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_back();
        self.entries.back()
    }

    /// Discard everything and keep `initial` as the single entry.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push_back(initial);
    }

    #[must_use]
    pub fn top(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }
}
