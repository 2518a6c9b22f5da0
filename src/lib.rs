//! # klondike-core
//!
//! Rules-and-state core for Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **No Globals**: The table is an ordinary value owned by the caller.
//!    Engine and history operations take it as a parameter.
//!
//! 2. **Rules Separate From Transfers**: Legality checks (`rules`) never
//!    move cards; transfer primitives (`engine::moves`) never check rules.
//!
//! 3. **Exact Undo**: Every player move snapshots the whole table first.
//!    Undo and redo restore card identity, order, and face-up state exactly.
//!
//! ## Architecture
//!
//! - **Persistent Snapshots**: O(1) cloning via `im-rs`; a stored snapshot
//!   can never alias a live stack.
//!
//! - **Closed Stack Kinds**: Tableau, Foundation, Talon, Stock, and Drag
//!   are an enum with `match` dispatch, not a trait hierarchy.
//!
//! ## Modules
//!
//! - `core`: Cards, stack IDs, configuration, errors, RNG
//! - `stacks`: Card containers and refresh observers
//! - `rules`: Acceptance rules per stack kind
//! - `table`: The table aggregate, dealing, deck sources
//! - `history`: Snapshots and undo/redo logs
//! - `engine`: Move primitives, `perform_move`, and `Session`

pub mod core;
pub mod stacks;
pub mod rules;
pub mod table;
pub mod history;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, CardKey, Rank, Suit,
    StackId, StackKind, SessionConfig,
    MoveError, TableError,
    GameRng, GameRngState,
};

pub use crate::stacks::{Stack, StackObserver};

pub use crate::table::{Table, DeckSource, ShuffledDeck, FixedDeck};

pub use crate::history::{Snapshot, UndoHistory};

pub use crate::engine::{Session, perform_move, move_top_card, copy_cards};
