//! The table aggregate and its deck supply.
//!
//! ## Key Types
//!
//! - `Table`: All 14 stacks of one game, indexed by `StackId`
//! - `DeckSource`: Supplies a complete deck for each deal
//! - `ShuffledDeck`, `FixedDeck`: Built-in sources

pub mod deck;
pub mod table;

pub use deck::{parse_card, parse_deck, DeckSource, FixedDeck, ShuffledDeck};
pub use table::{validate_deck, Table};
