//! Error types.
//!
//! Contract violations by the caller (popping more cards than a stack holds,
//! snapshotting during a drag) panic instead. Undo/redo on an empty log is
//! not an error at all; those return `false`.

use super::card::CardKey;

/// A player move that was rejected. The table and history are unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The source stack has no cards (or fewer than requested).
    EmptySource,
    /// The destination does not accept the card.
    IllegalMove,
    /// The cards to move are not a face-up, descending, alternating run.
    InvalidRun,
    /// A drag is in progress; finish or cancel it first.
    DragInProgress,
    /// There is no drag to drop or cancel.
    NoDragInProgress,
    /// The talon can only be recycled once the stock is empty.
    StockNotEmpty,
    /// Stock and talon are both empty.
    NothingToRecycle,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MoveError::EmptySource => "source stack does not hold enough cards",
            MoveError::IllegalMove => "destination does not accept the card",
            MoveError::InvalidRun => "cards are not a movable run",
            MoveError::DragInProgress => "a drag is in progress",
            MoveError::NoDragInProgress => "no drag is in progress",
            MoveError::StockNotEmpty => "stock is not empty",
            MoveError::NothingToRecycle => "talon is empty",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

/// The table (or a deck supplied to it) breaks the one-deck invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Total card count is not 52.
    CardCount(usize),
    /// A card identity appears more than once.
    DuplicateCard(CardKey),
    /// The drag stack holds cards outside a gesture.
    DragNotEmpty,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::CardCount(n) => write!(f, "expected 52 cards, found {}", n),
            TableError::DuplicateCard(key) => write!(f, "duplicate card {}", key),
            TableError::DragNotEmpty => write!(f, "drag stack is not empty"),
        }
    }
}

impl std::error::Error for TableError {}
