//! Per-kind acceptance rules.
//!
//! Rules are free functions dispatched on `StackKind`. They only look at
//! the destination's top card, so they can be evaluated without a `Stack`.

use crate::core::card::Card;
use crate::core::config::StackKind;

/// Check whether a stack of `kind` whose top card is `top` accepts `card`.
///
/// Talon and stock are source-only piles and never accept. Drag is a relay
/// with no rule of its own; it never accepts through this check either.
#[must_use]
pub fn accepts(kind: StackKind, top: Option<&Card>, card: &Card) -> bool {
    match kind {
        StackKind::Tableau => tableau_accepts(top, card),
        StackKind::Foundation => foundation_accepts(top, card),
        StackKind::Talon | StackKind::Stock | StackKind::Drag => false,
    }
}

/// Tableau rule: a King onto an empty stack, otherwise a face-up card one
/// rank lower and the opposite color onto a face-up top card.
#[must_use]
pub fn tableau_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        Some(top) => {
            top.face_up
                && card.face_up
                && !top.same_color(card)
                && card.rank.is_one_below(top.rank)
        }
        None => card.is_king(),
    }
}

/// Foundation rule: an Ace onto an empty pile, otherwise the same suit and
/// one rank higher.
#[must_use]
pub fn foundation_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        Some(top) => top.suit == card.suit && top.rank.is_one_below(card.rank),
        None => card.is_ace(),
    }
}

/// Check that every adjacent pair is face up, strictly descending by one,
/// and alternating in color.
///
/// Empty and single-card slices are trivially valid runs.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let (current, next) = (&pair[0], &pair[1]);
        current.face_up
            && next.face_up
            && next.rank.is_one_below(current.rank)
            && !current.same_color(next)
    })
}

/// Check whether a stack accepts a whole sequence.
///
/// `cards[0]` is the card that lands on the current top. The move is
/// all-or-nothing: the first card must be accepted and the rest must form
/// a valid run. Only tableau stacks take more than one card at once.
#[must_use]
pub fn accepts_sequence(kind: StackKind, top: Option<&Card>, cards: &[Card]) -> bool {
    match cards {
        [] => false,
        [single] => accepts(kind, top, single),
        [first, ..] => {
            kind == StackKind::Tableau && accepts(kind, top, first) && is_valid_run(cards)
        }
    }
}
