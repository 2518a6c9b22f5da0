//! The table: every stack in one game, owned by the caller.
//!
//! ## Layout
//!
//! - 7 tableau stacks
//! - 4 foundations (one per suit once started; which suit lands where is
//!   up to the player)
//! - talon, stock, and the drag stack
//!
//! A table is constructed and passed around explicitly. Engine and history
//! operations take it as a parameter, so independent tables never interfere.

use std::ops::{Index, IndexMut};
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::core::card::{Card, Rank, DECK_SIZE};
use crate::core::config::{StackId, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::core::error::TableError;
use crate::stacks::{Stack, StackObserver};

const STACK_COUNT: usize = TABLEAU_COUNT + FOUNDATION_COUNT + 3;
const FIRST_FOUNDATION: usize = TABLEAU_COUNT;
const TALON_SLOT: usize = FIRST_FOUNDATION + FOUNDATION_COUNT;
const STOCK_SLOT: usize = TALON_SLOT + 1;
const DRAG_SLOT: usize = STOCK_SLOT + 1;

/// All stacks of one game.
///
/// Index with a `StackId`:
///
/// ```
/// use klondike_core::core::StackId;
/// use klondike_core::table::Table;
///
/// let table = Table::new();
/// assert!(table[StackId::Tableau(6)].is_empty());
/// assert_eq!(table.total_cards(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    stacks: Vec<Stack>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create a table with every stack empty.
    #[must_use]
    pub fn new() -> Self {
        let stacks: Vec<Stack> = StackId::persistent()
            .chain(std::iter::once(StackId::Drag))
            .map(Stack::new)
            .collect();
        debug_assert_eq!(stacks.len(), STACK_COUNT);
        Self { stacks }
    }

    fn slot(id: StackId) -> usize {
        match id {
            StackId::Tableau(i) => {
                assert!((i as usize) < TABLEAU_COUNT, "Tableau index {} out of range", i);
                i as usize
            }
            StackId::Foundation(i) => {
                assert!((i as usize) < FOUNDATION_COUNT, "Foundation index {} out of range", i);
                FIRST_FOUNDATION + i as usize
            }
            StackId::Talon => TALON_SLOT,
            StackId::Stock => STOCK_SLOT,
            StackId::Drag => DRAG_SLOT,
        }
    }

    // === Access ===

    /// Get a stack.
    #[must_use]
    pub fn stack(&self, id: StackId) -> &Stack {
        &self.stacks[Self::slot(id)]
    }

    /// Get a stack mutably.
    pub fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        &mut self.stacks[Self::slot(id)]
    }

    /// Borrow two different stacks mutably at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: StackId, b: StackId) -> (&mut Stack, &mut Stack) {
        let (ia, ib) = (Self::slot(a), Self::slot(b));
        assert_ne!(ia, ib, "Cannot borrow {} twice", a);

        if ia < ib {
            let (lo, hi) = self.stacks.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.stacks.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        }
    }

    /// The tableau stacks, left to right.
    #[must_use]
    pub fn tableaus(&self) -> &[Stack] {
        &self.stacks[..FIRST_FOUNDATION]
    }

    /// The foundation stacks.
    #[must_use]
    pub fn foundations(&self) -> &[Stack] {
        &self.stacks[FIRST_FOUNDATION..TALON_SLOT]
    }

    #[must_use]
    pub fn talon(&self) -> &Stack {
        &self.stacks[TALON_SLOT]
    }

    #[must_use]
    pub fn stock(&self) -> &Stack {
        &self.stacks[STOCK_SLOT]
    }

    #[must_use]
    pub fn drag(&self) -> &Stack {
        &self.stacks[DRAG_SLOT]
    }

    /// Iterate over every stack, drag included.
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter()
    }

    /// Register one observer on every stack.
    pub fn set_observer(&mut self, observer: &Rc<dyn StackObserver>) {
        for stack in &mut self.stacks {
            stack.set_observer(observer);
        }
    }

    // === Dealing ===

    /// Empty every stack, drag included.
    pub fn clear(&mut self) {
        for stack in &mut self.stacks {
            stack.remove_all_cards();
        }
    }

    /// Clear the table and deal `deck` in the classic layout.
    ///
    /// Cards are taken from the end of `deck`. Tableau `i` receives `i + 1`
    /// cards, dealt row by row, with only its top card face up. The
    /// remaining 24 cards go face down into the stock.
    ///
    /// The deck must hold each of the 52 cards exactly once; otherwise the
    /// table is left untouched.
    pub fn deal(&mut self, deck: Vec<Card>) -> Result<(), TableError> {
        validate_deck(&deck)?;
        self.clear();

        let layout = (0..TABLEAU_COUNT)
            .flat_map(|row| (row..TABLEAU_COUNT).map(move |col| (row, col)));
        let mut cards = deck.into_iter();
        for ((row, col), card) in layout.zip(cards.by_ref().rev()) {
            self.stacks[col].add_card(card.with_face_up(col == row));
        }

        for card in cards {
            self.stacks[STOCK_SLOT].add_card(card.with_face_up(false));
        }

        debug!(stock = self.stock().len(), "dealt new table");
        Ok(())
    }

    // === Queries ===

    /// Total number of cards on the table, drag included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// Number of cards on the foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations().iter().map(Stack::len).sum()
    }

    /// Every foundation holds a complete suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations()
            .iter()
            .all(|f| f.len() == Rank::KING.value() as usize)
    }

    /// Verify the one-deck invariant: 52 cards, each identity exactly once.
    pub fn check_invariants(&self) -> Result<(), TableError> {
        let result = validate_cards(self.stacks.iter().flat_map(|s| s.cards()));
        if let Err(err) = &result {
            warn!(%err, "table invariant violated");
        }
        result
    }
}

impl Index<StackId> for Table {
    type Output = Stack;

    fn index(&self, id: StackId) -> &Stack {
        self.stack(id)
    }
}

impl IndexMut<StackId> for Table {
    fn index_mut(&mut self, id: StackId) -> &mut Stack {
        self.stack_mut(id)
    }
}

/// Check that `deck` holds each of the 52 cards exactly once.
pub fn validate_deck(deck: &[Card]) -> Result<(), TableError> {
    validate_cards(deck.iter())
}

fn validate_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), TableError> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card.key()) {
            return Err(TableError::DuplicateCard(card.key()));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(TableError::CardCount(seen.len()));
    }
    Ok(())
}
