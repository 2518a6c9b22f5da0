//! Legality rules for card placement.
//!
//! Each `StackKind` has its own acceptance rule:
//! - Tableau: King onto empty, else one lower and opposite color
//! - Foundation: Ace onto empty, else same suit and one higher
//! - Talon, Stock, Drag: never a rule-checked destination
//!
//! Rules only decide whether a move is legal. Performing it is the move
//! engine's job.

pub mod legality;

pub use legality::{accepts, accepts_sequence, foundation_accepts, is_valid_run, tableau_accepts};
