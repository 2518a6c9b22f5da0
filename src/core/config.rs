//! Table layout and session configuration.
//!
//! - `StackKind`: The five kinds of stack, each with its own legality rule
//! - `StackId`: Addresses one stack on the table
//! - `SessionConfig`: Undo depth, draw count, and deal seed
//!
//! The layout itself is fixed: 7 tableau stacks, 4 foundations, one talon,
//! one stock, and one drag stack.

use serde::{Deserialize, Serialize};

/// Number of tableau stacks.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation stacks.
pub const FOUNDATION_COUNT: usize = 4;

/// Default maximum undo depth.
pub const DEFAULT_MAX_UNDO_DEPTH: usize = 50;

/// Kind of stack. Determines which cards a stack accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackKind {
    /// Descending, alternating-color playing stack.
    Tableau,
    /// Ascending same-suit completion pile.
    Foundation,
    /// Face-up waste pile fed from the stock.
    Talon,
    /// Face-down draw pile.
    Stock,
    /// Transient holding area during a drag gesture.
    Drag,
}

/// Identifies one stack on the table.
///
/// Tableau indices are `0..7`, foundation indices `0..4`. Indexing a table
/// with an out-of-range ID panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackId {
    Tableau(u8),
    Foundation(u8),
    Talon,
    Stock,
    Drag,
}

impl StackId {
    /// The kind of stack this ID refers to.
    #[must_use]
    pub const fn kind(self) -> StackKind {
        match self {
            StackId::Tableau(_) => StackKind::Tableau,
            StackId::Foundation(_) => StackKind::Foundation,
            StackId::Talon => StackKind::Talon,
            StackId::Stock => StackKind::Stock,
            StackId::Drag => StackKind::Drag,
        }
    }

    /// All tableau IDs, left to right.
    pub fn tableaus() -> impl Iterator<Item = StackId> {
        (0..TABLEAU_COUNT as u8).map(StackId::Tableau)
    }

    /// All foundation IDs.
    pub fn foundations() -> impl Iterator<Item = StackId> {
        (0..FOUNDATION_COUNT as u8).map(StackId::Foundation)
    }

    /// Every stack that is part of a snapshot (everything except Drag).
    pub fn persistent() -> impl Iterator<Item = StackId> {
        Self::tableaus()
            .chain(Self::foundations())
            .chain([StackId::Talon, StackId::Stock])
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackId::Tableau(i) => write!(f, "Tableau({})", i),
            StackId::Foundation(i) => write!(f, "Foundation({})", i),
            StackId::Talon => write!(f, "Talon"),
            StackId::Stock => write!(f, "Stock"),
            StackId::Drag => write!(f, "Drag"),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of undo snapshots retained (oldest evicted first).
    pub max_undo_depth: usize,

    /// Cards turned from stock to talon per draw (1 or 3).
    pub draw_count: usize,

    /// Seed for the built-in shuffled deck source.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_undo_depth: DEFAULT_MAX_UNDO_DEPTH,
            draw_count: 1,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the maximum undo depth.
    ///
    /// Panics if `depth` is zero.
    #[must_use]
    pub fn with_max_undo_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Undo depth must be at least 1");
        self.max_undo_depth = depth;
        self
    }

    /// Set the draw count.
    ///
    /// Panics unless `count` is 1 or 3.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        assert!(count == 1 || count == 3, "Draw count must be 1 or 3");
        self.draw_count = count;
        self
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
