//! Playing cards: suit, rank, and face-up state.
//!
//! ## Identity vs. Equality
//!
//! A `Card` compares equal only if suit, rank, **and** face-up flag match.
//! That is what snapshots compare when checking that a restore is exact.
//!
//! The deck invariant (each card exactly once) is about identity, which
//! ignores the face-up flag. Use `Card::key()` to get the `CardKey`.
//!
//! ```
//! use klondike_core::core::{Card, Rank, Suit};
//!
//! let up = Card::face_up(Suit::Heart, Rank::new(7));
//! let down = Card::new(Suit::Heart, Rank::new(7));
//!
//! assert_ne!(up, down);
//! assert_eq!(up.key(), down.key());
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All four suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    /// Check if two suits have the same color.
    #[must_use]
    pub const fn same_color(self, other: Suit) -> bool {
        self.is_red() == other.is_red()
    }

    /// Single-letter notation (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }

    /// Parse single-letter notation, case-insensitive.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Suit::Spade),
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            _ => None,
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
///
/// Serialized as a bare number; out-of-range values fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= 13, "Rank must be in 1..=13");
        Self(value)
    }

    /// Get the numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Check if `self` is exactly one rank below `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }

    /// Single-character notation (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.0 {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => (b'0' + n) as char,
        }
    }

    /// Parse single-character notation, case-insensitive.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::ACE),
            'T' => Some(Rank(10)),
            'J' => Some(Rank::JACK),
            'Q' => Some(Rank::QUEEN),
            'K' => Some(Rank::KING),
            d @ '2'..='9' => Some(Rank(d as u8 - b'0')),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=13).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(format!("rank {} out of range 1..=13", value))
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// Card identity: suit and rank, without face-up state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, face_up: false }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, face_up: true }
    }

    /// Get this card's identity.
    #[must_use]
    pub const fn key(&self) -> CardKey {
        CardKey { suit: self.suit, rank: self.rank }
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Check if this card has the same color as `other`.
    #[must_use]
    pub const fn same_color(&self, other: &Card) -> bool {
        self.suit.same_color(other.suit)
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank.0 == Rank::ACE.0
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank.0 == Rank::KING.0
    }

    /// Return a copy with the face-up flag set to `face_up`.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    /// A full 52-card deck, face down, ordered by suit then rank.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.key())
        } else {
            write!(f, "[{}]", self.key())
        }
    }
}
