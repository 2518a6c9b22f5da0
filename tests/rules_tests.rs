//! Legality rule tests through the public `Stack` API.
//!
//! These mirror the standard Klondike placement rules: tableau runs
//! descend and alternate color, foundations build up by suit.

use klondike_core::core::{Card, Rank, StackId, Suit};
use klondike_core::stacks::Stack;

fn up(suit: Suit, rank: u8) -> Card {
    Card::face_up(suit, Rank::new(rank))
}

fn down(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank))
}

fn stack_with(id: StackId, cards: &[Card]) -> Stack {
    let mut stack = Stack::new(id);
    for &card in cards {
        stack.add_card(card);
    }
    stack
}

// =============================================================================
// Tableau
// =============================================================================

/// An empty tableau only takes a King.
#[test]
fn test_empty_tableau_king_only() {
    let tableau = Stack::new(StackId::Tableau(0));

    assert!(tableau.can_accept(&up(Suit::Spade, 13)));
    assert!(!tableau.can_accept(&up(Suit::Heart, 12)));
}

/// A face-up black seven takes a red six only when the top is face up.
#[test]
fn test_tableau_black_seven() {
    let tableau = stack_with(StackId::Tableau(2), &[up(Suit::Spade, 7)]);

    assert!(tableau.can_accept(&up(Suit::Heart, 6)));
    assert!(!tableau.can_accept(&up(Suit::Club, 6)));

    let hidden = stack_with(StackId::Tableau(2), &[down(Suit::Spade, 7)]);
    assert!(!hidden.can_accept(&up(Suit::Heart, 6)));
}

/// A face-down red six is rejected even though rank and color fit.
#[test]
fn test_tableau_face_down_candidate() {
    let tableau = stack_with(StackId::Tableau(2), &[up(Suit::Spade, 7)]);
    assert!(!tableau.can_accept(&down(Suit::Heart, 6)));
    assert!(tableau.can_accept(&up(Suit::Heart, 6)));

    // As part of a multi-card sequence, face-down cards are rejected
    assert!(!tableau.can_accept_sequence(&[down(Suit::Heart, 6), up(Suit::Club, 5)]));
}

// =============================================================================
// Foundation
// =============================================================================

/// An empty foundation takes any Ace and nothing else.
#[test]
fn test_empty_foundation_ace_only() {
    let foundation = Stack::new(StackId::Foundation(3));

    for suit in Suit::ALL {
        assert!(foundation.can_accept(&up(suit, 1)));
    }
    assert!(!foundation.can_accept(&up(Suit::Heart, 2)));
    assert!(!foundation.can_accept(&up(Suit::Heart, 13)));
}

/// A foundation topped by the five of hearts takes only the six of hearts.
#[test]
fn test_foundation_heart_five() {
    let cards: Vec<Card> = (1..=5).map(|r| up(Suit::Heart, r)).collect();
    let foundation = stack_with(StackId::Foundation(1), &cards);

    assert!(foundation.can_accept(&up(Suit::Heart, 6)));
    assert!(!foundation.can_accept(&up(Suit::Diamond, 6)));
    assert!(!foundation.can_accept(&up(Suit::Heart, 7)));
}

// =============================================================================
// Sequences
// =============================================================================

/// A descending alternating face-up run lands on a red nine.
#[test]
fn test_sequence_onto_red_nine() {
    let tableau = stack_with(StackId::Tableau(5), &[up(Suit::Heart, 9)]);

    let run = [up(Suit::Spade, 8), up(Suit::Diamond, 7), up(Suit::Club, 6)];
    assert!(tableau.can_accept_sequence(&run));

    let hidden_tail = [up(Suit::Spade, 8), up(Suit::Diamond, 7), down(Suit::Club, 6)];
    assert!(!tableau.can_accept_sequence(&hidden_tail));
}

/// A run not headed by a King never lands on an empty tableau.
#[test]
fn test_sequence_onto_empty_tableau() {
    let tableau = Stack::new(StackId::Tableau(0));

    assert!(!tableau.can_accept_sequence(&[up(Suit::Heart, 7), up(Suit::Spade, 6)]));
    assert!(tableau.can_accept_sequence(&[up(Suit::Heart, 13), up(Suit::Spade, 12)]));
}

/// Any break in the run rejects the whole sequence.
#[test]
fn test_sequence_all_or_nothing() {
    let tableau = stack_with(StackId::Tableau(5), &[up(Suit::Heart, 9)]);

    // Same color in the middle
    assert!(!tableau.can_accept_sequence(&[up(Suit::Spade, 8), up(Suit::Club, 7)]));
    // Rank gap at the end
    let gap = [up(Suit::Spade, 8), up(Suit::Heart, 7), up(Suit::Club, 5)];
    assert!(!tableau.can_accept_sequence(&gap));
    // Empty
    assert!(!tableau.can_accept_sequence(&[]));
}

// =============================================================================
// Source-only piles
// =============================================================================

/// Talon, stock, and drag never accept a dropped card.
#[test]
fn test_source_only_piles() {
    for id in [StackId::Talon, StackId::Stock, StackId::Drag] {
        let stack = Stack::new(id);
        assert!(!stack.can_accept(&up(Suit::Spade, 13)));
        assert!(!stack.can_accept(&up(Suit::Spade, 1)));
        assert!(!stack.can_accept_sequence(&[up(Suit::Spade, 1)]));
    }
}
