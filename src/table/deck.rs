//! Deck supply for new deals.
//!
//! The table never shuffles on its own; a `DeckSource` hands it a complete
//! deck for every deal.
//!
//! - `ShuffledDeck`: Seeded, reproducible shuffles via `GameRng`
//! - `FixedDeck`: Always the same order, e.g. a deal parsed from text

use anyhow::{bail, Context, Result};

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Supplies a fresh 52-card deck for each deal.
///
/// Cards are dealt from the end of the returned vector.
pub trait DeckSource {
    fn next_deck(&mut self) -> Vec<Card>;
}

/// Shuffles a standard deck with a seeded RNG.
#[derive(Clone, Debug)]
pub struct ShuffledDeck {
    rng: GameRng,
}

impl ShuffledDeck {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The underlying RNG, e.g. to capture its state for replay.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl DeckSource for ShuffledDeck {
    fn next_deck(&mut self) -> Vec<Card> {
        let mut deck = Card::standard_deck();
        self.rng.shuffle(&mut deck);
        deck
    }
}

/// Returns the same deck every time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDeck {
    cards: Vec<Card>,
}

impl FixedDeck {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a deck from text; see `parse_deck`.
    pub fn parse(content: &str) -> Result<Self> {
        parse_deck(content).map(Self::new)
    }
}

impl DeckSource for FixedDeck {
    fn next_deck(&mut self) -> Vec<Card> {
        self.cards.clone()
    }
}

/// Parse whitespace-separated cards, rank then suit: `AS 2H TD JC QS KH`.
///
/// Ranks are `A 2-9 T J Q K`, suits `S H D C`, both case-insensitive.
/// All parsed cards are face down. This does not check for a full deck;
/// dealing does.
pub fn parse_deck(content: &str) -> Result<Vec<Card>> {
    content
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            parse_card(token).with_context(|| format!("card #{} ({:?})", i + 1, token))
        })
        .collect()
}

/// Parse a single card token such as `QH` or `tc`.
pub fn parse_card(token: &str) -> Result<Card> {
    let mut chars = token.chars();
    let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
        bail!("expected two characters, got {:?}", token);
    };
    let rank = Rank::from_symbol(r).with_context(|| format!("invalid rank '{}'", r))?;
    let suit = Suit::from_symbol(s).with_context(|| format!("invalid suit '{}'", s))?;
    Ok(Card::new(suit, rank))
}
