//! Core types: cards, stack addressing, configuration, errors, RNG.
//!
//! These are the leaf building blocks. Nothing here knows about legality
//! rules or history.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, CardKey, Rank, Suit, DECK_SIZE};
pub use config::{
    SessionConfig, StackId, StackKind, DEFAULT_MAX_UNDO_DEPTH, FOUNDATION_COUNT, TABLEAU_COUNT,
};
pub use error::{MoveError, TableError};
pub use rng::{GameRng, GameRngState};
