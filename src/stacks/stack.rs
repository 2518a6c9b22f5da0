//! A single ordered card container.
//!
//! Index 0 is the bottom card, the last element is the top (visible) card.
//! Every mutating call notifies the registered observer exactly once.

use std::rc::{Rc, Weak};

use tracing::trace;

use super::observer::StackObserver;
use crate::core::card::Card;
use crate::core::config::{StackId, StackKind};
use crate::rules;

/// An ordered stack of cards with a kind-specific acceptance rule.
///
/// ## Usage
///
/// ```
/// use klondike_core::core::{Card, Rank, StackId, Suit};
/// use klondike_core::stacks::Stack;
///
/// let mut tableau = Stack::new(StackId::Tableau(0));
/// assert!(tableau.can_accept(&Card::face_up(Suit::Spade, Rank::KING)));
///
/// tableau.add_card(Card::face_up(Suit::Spade, Rank::KING));
/// assert!(tableau.can_accept(&Card::face_up(Suit::Heart, Rank::QUEEN)));
/// assert!(!tableau.can_accept(&Card::face_up(Suit::Club, Rank::QUEEN)));
/// ```
#[derive(Clone, Debug)]
pub struct Stack {
    id: StackId,
    cards: Vec<Card>,
    observer: Option<Weak<dyn StackObserver>>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new(id: StackId) -> Self {
        Self {
            id,
            cards: Vec::new(),
            observer: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> StackId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> StackKind {
        self.id.kind()
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The top `n` cards, bottom first.
    ///
    /// Returns `None` if the stack holds fewer than `n` cards.
    #[must_use]
    pub fn top_cards(&self, n: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(n)?;
        Some(&self.cards[start..])
    }

    /// Length of the longest valid run ending at the top card.
    ///
    /// Zero if the stack is empty or its top card is face down.
    #[must_use]
    pub fn top_run_len(&self) -> usize {
        match self.cards.last() {
            Some(top) if top.face_up => {}
            _ => return 0,
        }
        1 + self
            .cards
            .windows(2)
            .rev()
            .take_while(|pair| rules::is_valid_run(pair))
            .count()
    }

    // === Mutation ===

    /// Put a card on top.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.notify();
    }

    /// Remove every card.
    pub fn remove_all_cards(&mut self) {
        self.cards.clear();
        self.notify();
    }

    /// Remove the top `n` cards, optionally turning the new top card face up.
    ///
    /// Panics if the stack holds fewer than `n` cards. That is a caller
    /// bug, never a condition to recover from.
    pub fn pop_cards(&mut self, n: usize, make_top_face_up: bool) {
        assert!(
            n <= self.cards.len(),
            "Attempted to pop {} cards from {} holding {}",
            n,
            self.id,
            self.cards.len()
        );

        self.cards.truncate(self.cards.len() - n);
        if make_top_face_up {
            if let Some(top) = self.cards.last_mut() {
                top.face_up = true;
            }
        }
        trace!(stack = %self.id, popped = n, remaining = self.cards.len(), "pop_cards");
        self.notify();
    }

    // === Legality ===

    /// Check whether this stack accepts `card` on its current top.
    #[must_use]
    pub fn can_accept(&self, card: &Card) -> bool {
        rules::accepts(self.kind(), self.top_card(), card)
    }

    /// Check whether this stack accepts a whole sequence, `cards[0]` first.
    ///
    /// All-or-nothing; see `rules::accepts_sequence`.
    #[must_use]
    pub fn can_accept_sequence(&self, cards: &[Card]) -> bool {
        rules::accepts_sequence(self.kind(), self.top_card(), cards)
    }

    // === Observer ===

    /// Register an observer. The stack does not keep it alive.
    pub fn set_observer(&mut self, observer: &Rc<dyn StackObserver>) {
        self.observer = Some(Rc::downgrade(observer));
    }

    /// Drop the observer registration.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn notify(&self) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.refresh(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use std::cell::RefCell;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::face_up(suit, Rank::new(rank))
    }

    fn down(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank))
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<StackId>>,
    }

    impl StackObserver for Recorder {
        fn refresh(&self, stack: StackId) {
            self.calls.borrow_mut().push(stack);
        }
    }

    #[test]
    fn test_add_and_top() {
        let mut stack = Stack::new(StackId::Talon);
        assert!(stack.top_card().is_none());

        stack.add_card(up(Suit::Heart, 3));
        stack.add_card(up(Suit::Club, 9));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top_card(), Some(&up(Suit::Club, 9)));
        assert_eq!(stack.cards()[0], up(Suit::Heart, 3));
    }

    #[test]
    fn test_pop_exposes_top() {
        let mut stack = Stack::new(StackId::Tableau(2));
        stack.add_card(down(Suit::Spade, 4));
        stack.add_card(down(Suit::Heart, 10));
        stack.add_card(up(Suit::Club, 2));

        stack.pop_cards(1, true);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top_card(), Some(&up(Suit::Heart, 10)));
        assert!(!stack.cards()[0].face_up);
    }

    #[test]
    fn test_pop_without_expose() {
        let mut stack = Stack::new(StackId::Stock);
        stack.add_card(down(Suit::Spade, 4));
        stack.add_card(down(Suit::Heart, 10));

        stack.pop_cards(1, false);
        assert_eq!(stack.top_card(), Some(&down(Suit::Spade, 4)));
    }

    #[test]
    fn test_pop_all_with_expose() {
        let mut stack = Stack::new(StackId::Tableau(0));
        stack.add_card(down(Suit::Spade, 4));

        stack.pop_cards(1, true);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_zero_is_allowed() {
        let mut stack = Stack::new(StackId::Tableau(0));
        stack.add_card(down(Suit::Spade, 4));

        stack.pop_cards(0, true);
        assert_eq!(stack.top_card(), Some(&up(Suit::Spade, 4)));
    }

    #[test]
    #[should_panic(expected = "Attempted to pop")]
    fn test_pop_too_many_panics() {
        let mut stack = Stack::new(StackId::Tableau(0));
        stack.add_card(up(Suit::Spade, 4));
        stack.pop_cards(2, false);
    }

    #[test]
    fn test_remove_all() {
        let mut stack = Stack::new(StackId::Foundation(1));
        stack.add_card(up(Suit::Heart, 1));
        stack.remove_all_cards();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_cards() {
        let mut stack = Stack::new(StackId::Tableau(0));
        stack.add_card(down(Suit::Spade, 4));
        stack.add_card(up(Suit::Heart, 10));
        stack.add_card(up(Suit::Club, 9));

        assert_eq!(stack.top_cards(2), Some(&[up(Suit::Heart, 10), up(Suit::Club, 9)][..]));
        assert_eq!(stack.top_cards(0), Some(&[][..]));
        assert_eq!(stack.top_cards(4), None);
    }

    #[test]
    fn test_top_run_len() {
        let mut stack = Stack::new(StackId::Tableau(0));
        assert_eq!(stack.top_run_len(), 0);

        stack.add_card(down(Suit::Spade, 9));
        assert_eq!(stack.top_run_len(), 0);

        stack.add_card(up(Suit::Spade, 8));
        stack.add_card(up(Suit::Heart, 7));
        stack.add_card(up(Suit::Club, 6));
        assert_eq!(stack.top_run_len(), 3);

        // Breaks the run: same color as the six
        stack.add_card(up(Suit::Spade, 5));
        assert_eq!(stack.top_run_len(), 1);
    }

    #[test]
    fn test_can_accept_dispatches_on_kind() {
        let king = up(Suit::Spade, 13);
        let ace = up(Suit::Spade, 1);

        assert!(Stack::new(StackId::Tableau(0)).can_accept(&king));
        assert!(!Stack::new(StackId::Tableau(0)).can_accept(&ace));
        assert!(Stack::new(StackId::Foundation(0)).can_accept(&ace));
        assert!(!Stack::new(StackId::Foundation(0)).can_accept(&king));
        assert!(!Stack::new(StackId::Talon).can_accept(&ace));
        assert!(!Stack::new(StackId::Stock).can_accept(&king));
        assert!(!Stack::new(StackId::Drag).can_accept(&king));
    }

    #[test]
    fn test_can_accept_sequence() {
        let mut stack = Stack::new(StackId::Tableau(4));
        stack.add_card(up(Suit::Heart, 9));

        let run = [up(Suit::Spade, 8), up(Suit::Heart, 7), up(Suit::Club, 6)];
        assert!(stack.can_accept_sequence(&run));
        assert!(!stack.can_accept_sequence(&run[1..]));
        assert!(!stack.can_accept_sequence(&[]));
    }

    #[test]
    fn test_observer_notified_once_per_call() {
        let recorder = Rc::new(Recorder::default());
        let observer: Rc<dyn StackObserver> = recorder.clone();

        let mut stack = Stack::new(StackId::Tableau(3));
        stack.set_observer(&observer);

        stack.add_card(up(Suit::Heart, 5));
        stack.add_card(up(Suit::Club, 4));
        stack.pop_cards(2, true);
        stack.remove_all_cards();

        assert_eq!(recorder.calls.borrow().len(), 4);
        assert!(recorder.calls.borrow().iter().all(|&id| id == StackId::Tableau(3)));
    }

    #[test]
    fn test_observer_dropped_is_tolerated() {
        let mut stack = Stack::new(StackId::Talon);
        {
            let observer: Rc<dyn StackObserver> = Rc::new(Recorder::default());
            stack.set_observer(&observer);
        }
        stack.add_card(up(Suit::Heart, 5));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clear_observer() {
        let recorder = Rc::new(Recorder::default());
        let observer: Rc<dyn StackObserver> = recorder.clone();

        let mut stack = Stack::new(StackId::Talon);
        stack.set_observer(&observer);
        stack.clear_observer();
        stack.add_card(up(Suit::Heart, 5));

        assert!(recorder.calls.borrow().is_empty());
    }
}
