//! Move engine and game sessions.
//!
//! - `moves`: Transfer primitives (`move_top_card`, `copy_cards`,
//!   `move_run`) and `perform_move`, which records undo history
//! - `session`: `Session`, the caller-owned game with validated
//!   player moves and drag gestures

pub mod moves;
pub mod session;

pub use moves::{copy_cards, move_run, move_top_card, perform_move, transfer_top_card, Run};
pub use session::Session;
