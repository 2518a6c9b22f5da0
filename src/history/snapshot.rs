//! Immutable full-table snapshots.
//!
//! A `Snapshot` captures every stack except Drag. Card sequences are stored
//! as `im::Vector`s: cloning a snapshot is O(1), and nothing done to the
//! live table afterwards can reach into a stored snapshot.
//!
//! ## Equality
//!
//! Two snapshots are equal if every corresponding stack holds the same
//! cards in the same order, face-up flags included. The capture timestamp
//! is diagnostic only and is ignored.

use std::time::SystemTime;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, DECK_SIZE};
use crate::core::config::{StackId, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::table::Table;

/// A deep, immutable capture of the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    tableaus: [Vector<Card>; TABLEAU_COUNT],
    foundations: [Vector<Card>; FOUNDATION_COUNT],
    stock: Vector<Card>,
    talon: Vector<Card>,
    captured_at: SystemTime,
}

impl Snapshot {
    /// Approximate memory cost of one snapshot, in bytes.
    pub const ESTIMATED_FOOTPRINT: usize = 1024;

    /// Capture the current table.
    ///
    /// Panics if the drag stack holds cards: snapshots are only taken
    /// between gestures.
    #[must_use]
    pub fn capture(table: &Table) -> Self {
        assert!(
            table.drag().is_empty(),
            "Snapshot taken while the drag stack holds {} cards",
            table.drag().len()
        );

        let copy = |id: StackId| table[id].cards().iter().copied().collect::<Vector<Card>>();
        Self {
            tableaus: std::array::from_fn(|i| copy(StackId::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| copy(StackId::Foundation(i as u8))),
            stock: copy(StackId::Stock),
            talon: copy(StackId::Talon),
            captured_at: SystemTime::now(),
        }
    }

    /// Build a snapshot from explicit card lists, bottom card first.
    #[must_use]
    pub fn from_parts(
        tableaus: [Vec<Card>; TABLEAU_COUNT],
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        stock: Vec<Card>,
        talon: Vec<Card>,
    ) -> Self {
        Self {
            tableaus: tableaus.map(Vector::from),
            foundations: foundations.map(Vector::from),
            stock: Vector::from(stock),
            talon: Vector::from(talon),
            captured_at: SystemTime::now(),
        }
    }

    /// Overwrite the table with this snapshot.
    ///
    /// Clears the drag stack, then clears every other stack and re-adds the
    /// captured cards in their original order.
    pub fn restore(&self, table: &mut Table) {
        table[StackId::Drag].remove_all_cards();

        for id in StackId::persistent() {
            let stack = &mut table[id];
            stack.remove_all_cards();
            for card in self.cards(id) {
                stack.add_card(*card);
            }
        }
    }

    /// Captured cards of one stack, bottom first.
    ///
    /// Panics for `StackId::Drag`, which is never captured.
    #[must_use]
    pub fn cards(&self, id: StackId) -> &Vector<Card> {
        match id {
            StackId::Tableau(i) => &self.tableaus[i as usize],
            StackId::Foundation(i) => &self.foundations[i as usize],
            StackId::Stock => &self.stock,
            StackId::Talon => &self.talon,
            StackId::Drag => panic!("Drag stack is not part of a snapshot"),
        }
    }

    /// When this snapshot was taken.
    #[must_use]
    pub fn captured_at(&self) -> SystemTime {
        self.captured_at
    }

    // === Diagnostics ===

    /// Total cards captured. Always 52 for a snapshot of a dealt table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        StackId::persistent().map(|id| self.cards(id).len()).sum()
    }

    /// Cards on the foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vector::len).sum()
    }

    /// All 52 cards are on the foundations.
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.foundation_card_count() == DECK_SIZE
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.tableaus == other.tableaus
            && self.foundations == other.foundations
            && self.stock == other.stock
            && self.talon == other.talon
    }
}

impl Eq for Snapshot {}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tableau_sizes: Vec<usize> = self.tableaus.iter().map(Vector::len).collect();
        writeln!(f, "Snapshot:")?;
        writeln!(f, "- Total Cards: {}/{}", self.total_cards(), DECK_SIZE)?;
        writeln!(f, "- Foundation: {} cards", self.foundation_card_count())?;
        writeln!(f, "- Tableau: {:?}", tableau_sizes)?;
        writeln!(f, "- Stock: {}", self.stock.len())?;
        writeln!(f, "- Talon: {}", self.talon.len())?;
        write!(f, "- Game Won: {}", self.is_game_won())
    }
}
