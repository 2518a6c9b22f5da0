//! Undo/redo logs of table snapshots.
//!
//! `UndoHistory` keeps two LIFO logs:
//! - **undo**: states before each move, newest at the back
//! - **redo**: states undone since the last move, newest at the back
//!
//! Both logs are capped at `max_depth`; once full, the oldest entry is
//! evicted. Saving a new state clears the redo log, so a fresh move always
//! invalidates redo.
//!
//! ## Usage
//!
//! ```
//! use klondike_core::core::{Card, StackId};
//! use klondike_core::history::{Snapshot, UndoHistory};
//! use klondike_core::table::Table;
//!
//! let mut table = Table::new();
//! table.deal(Card::standard_deck()).unwrap();
//! let mut history = UndoHistory::default();
//!
//! history.save_state(Snapshot::capture(&table));
//! table[StackId::Stock].pop_cards(1, false);
//!
//! assert!(history.perform_undo(&mut table));
//! assert_eq!(table.stock().len(), 24);
//! assert!(history.perform_redo(&mut table));
//! assert_eq!(table.stock().len(), 23);
//! ```

use std::collections::VecDeque;

use tracing::debug;

use super::snapshot::Snapshot;
use crate::core::config::DEFAULT_MAX_UNDO_DEPTH;
use crate::table::Table;

/// Bounded undo and redo logs.
#[derive(Clone, Debug)]
pub struct UndoHistory {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    max_depth: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO_DEPTH)
    }
}

impl UndoHistory {
    /// Create empty logs holding at most `max_depth` snapshots each.
    ///
    /// Panics if `max_depth` is zero.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        assert!(max_depth > 0, "Undo depth must be at least 1");
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            max_depth,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    // === Recording ===

    /// Record the state before a move. Clears the redo log.
    pub fn save_state(&mut self, snapshot: Snapshot) {
        push_capped(&mut self.undo, snapshot, self.max_depth);
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "redo log invalidated");
            self.redo.clear();
        }
        debug!(undo = self.undo.len(), "state saved");
    }

    /// Undo the last move.
    ///
    /// Pushes the live table onto the redo log and restores the newest undo
    /// snapshot. Returns `false` and leaves the table untouched if there is
    /// nothing to undo.
    pub fn perform_undo(&mut self, table: &mut Table) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        push_capped(&mut self.redo, Snapshot::capture(table), self.max_depth);
        previous.restore(table);
        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        true
    }

    /// Redo the last undone move. Mirror of `perform_undo`.
    pub fn perform_redo(&mut self, table: &mut Table) -> bool {
        let Some(next) = self.redo.pop_back() else {
            return false;
        };
        push_capped(&mut self.undo, Snapshot::capture(table), self.max_depth);
        next.restore(table);
        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        true
    }

    // === Inspection ===

    /// The snapshot the next undo would restore.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    /// The snapshot the next redo would restore.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&Snapshot> {
        self.redo.back()
    }

    /// Undo log entries, oldest first.
    pub fn undo_log(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo.iter()
    }

    /// Redo log entries, oldest first.
    pub fn redo_log(&self) -> impl Iterator<Item = &Snapshot> {
        self.redo.iter()
    }

    // === Maintenance ===

    /// Drop the newest undo entry without restoring it.
    ///
    /// Returns `false` if the log was empty.
    pub fn pop_undo(&mut self) -> bool {
        self.undo.pop_back().is_some()
    }

    /// Drop the newest redo entry without restoring it.
    ///
    /// Returns `false` if the log was empty.
    pub fn pop_redo(&mut self) -> bool {
        self.redo.pop_back().is_some()
    }

    /// Empty both logs. Called on every new deal.
    pub fn clear_history(&mut self) {
        self.undo.clear();
        self.redo.clear();
        debug!("history cleared");
    }

    /// Keep only the `keep_count` newest undo entries.
    ///
    /// No-op if the log already holds `keep_count` or fewer.
    pub fn compact_undo_stack(&mut self, keep_count: usize) {
        if self.undo.len() <= keep_count {
            return;
        }
        let remove = self.undo.len() - keep_count;
        self.undo.drain(..remove);
        debug!(removed = remove, undo = self.undo.len(), "undo log compacted");
    }

    /// Rough memory held by both logs, in bytes.
    #[must_use]
    pub fn estimated_memory_usage(&self) -> usize {
        (self.undo.len() + self.redo.len()) * Snapshot::ESTIMATED_FOOTPRINT
    }
}

fn push_capped(log: &mut VecDeque<Snapshot>, snapshot: Snapshot, max_depth: usize) {
    log.push_back(snapshot);
    while log.len() > max_depth {
        log.pop_front();
        debug!(max_depth, "evicted oldest snapshot");
    }
}

impl std::fmt::Display for UndoHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UndoHistory(undo: {}/{}, redo: {}, memory: ~{}KB)",
            self.undo.len(),
            self.max_depth,
            self.redo.len(),
            self.estimated_memory_usage() / 1024
        )
    }
}
