//! A game session: one table, its history, and the player-level moves.
//!
//! Every successful move goes through `perform_move`, so it can be undone.
//! A rejected move returns a `MoveError` and leaves both the table and the
//! history exactly as they were.
//!
//! ## Drag Gestures
//!
//! `begin_drag` lifts a run onto the drag stack. `cancel_drag` puts it back
//! without touching history. `drop_drag` puts it back too, then performs
//! the real move from the origin so that the recorded snapshot never
//! contains an occupied drag stack.
//!
//! ## Usage
//!
//! ```
//! use klondike_core::core::SessionConfig;
//! use klondike_core::engine::Session;
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7));
//! session.deal_next().unwrap();
//!
//! session.draw_from_stock().unwrap();
//! assert_eq!(session.table().talon().len(), 1);
//!
//! assert_eq!(session.undo(), Ok(true));
//! assert!(session.table().talon().is_empty());
//! assert_eq!(session.redo(), Ok(true));
//! ```

use std::rc::Rc;

use tracing::{debug, info};

use super::moves::{self, perform_move};
use crate::core::config::{SessionConfig, StackId, StackKind};
use crate::core::error::{MoveError, TableError};
use crate::core::rng::{GameRng, GameRngState};
use crate::history::UndoHistory;
use crate::rules;
use crate::stacks::StackObserver;
use crate::table::{DeckSource, ShuffledDeck, Table};

/// Where the cards on the drag stack came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DragOrigin {
    from: StackId,
    count: usize,
}

/// One game: table, undo history, configuration, and drag state.
#[derive(Debug)]
pub struct Session {
    table: Table,
    history: UndoHistory,
    config: SessionConfig,
    deck: ShuffledDeck,
    /// Shuffle position the current deal was drawn from, if it came from
    /// `deal_next`.
    deal_start: Option<GameRngState>,
    drag: Option<DragOrigin>,
}

impl Session {
    /// Create a session with an empty table. Call `deal_next` or
    /// `initialize_deal` to start playing.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            table: Table::new(),
            history: UndoHistory::new(config.max_undo_depth),
            deck: ShuffledDeck::new(config.seed),
            config,
            deal_start: None,
            drag: None,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Mutable history, e.g. for `compact_undo_stack` under memory pressure.
    pub fn history_mut(&mut self) -> &mut UndoHistory {
        &mut self.history
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Register a refresh observer on every stack.
    pub fn set_observer(&mut self, observer: &Rc<dyn StackObserver>) {
        self.table.set_observer(observer);
    }

    // === Dealing ===

    /// Start a new game with a deck from `source`.
    ///
    /// Obtains the deck, clears every stack, deals the classic layout, and
    /// clears the history. Any drag in progress is abandoned. If the deck
    /// is not a complete 52-card deck, nothing changes.
    pub fn initialize_deal(&mut self, source: &mut impl DeckSource) -> Result<(), TableError> {
        let deck = source.next_deck();
        self.table.deal(deck)?;
        self.deal_start = None;
        self.drag = None;
        self.history.clear_history();
        info!(stock = self.table.stock().len(), "new deal");
        Ok(())
    }

    /// Start a new game with the next deck from the session's seeded shuffle.
    pub fn deal_next(&mut self) -> Result<(), TableError> {
        let start = self.deck.rng().state();
        let mut deck = self.deck.clone();
        self.initialize_deal(&mut deck)?;
        self.deck = deck;
        self.deal_start = Some(start);
        Ok(())
    }

    /// Shuffle position of the current deal, if it came from `deal_next`.
    ///
    /// Store it to replay the same game later with `replay_deal`.
    #[must_use]
    pub fn deal_state(&self) -> Option<&GameRngState> {
        self.deal_start.as_ref()
    }

    /// Deal the game that `state` was captured from, then continue the
    /// seeded sequence after it.
    pub fn replay_deal(&mut self, state: &GameRngState) -> Result<(), TableError> {
        self.deck = ShuffledDeck::from_rng(GameRng::from_state(state));
        self.deal_next()
    }

    /// Deal the current game again from the start, clearing history.
    ///
    /// Returns `Ok(false)` if the current deal did not come from
    /// `deal_next`, e.g. after `initialize_deal` with a fixed deck.
    pub fn restart_deal(&mut self) -> Result<bool, TableError> {
        let Some(state) = self.deal_start.clone() else {
            return Ok(false);
        };
        self.replay_deal(&state)?;
        Ok(true)
    }

    // === Player Moves ===

    /// Turn `draw_count` cards (or as many as remain) from stock onto talon.
    pub fn draw_from_stock(&mut self) -> Result<(), MoveError> {
        self.ensure_no_drag()?;
        if self.table.stock().is_empty() {
            return Err(MoveError::EmptySource);
        }

        let n = self.config.draw_count.min(self.table.stock().len());
        perform_move(&mut self.table, &mut self.history, |table| {
            for _ in 0..n {
                moves::move_top_card(table, StackId::Stock, StackId::Talon, true, false);
            }
        });
        Ok(())
    }

    /// Turn the talon back over into an empty stock.
    pub fn recycle_talon(&mut self) -> Result<(), MoveError> {
        self.ensure_no_drag()?;
        if !self.table.stock().is_empty() {
            return Err(MoveError::StockNotEmpty);
        }
        if self.table.talon().is_empty() {
            return Err(MoveError::NothingToRecycle);
        }

        perform_move(&mut self.table, &mut self.history, |table| {
            moves::copy_cards(table, StackId::Talon, StackId::Stock);
        });
        Ok(())
    }

    /// Move the top card of `from` onto foundation `foundation`.
    pub fn move_to_foundation(&mut self, from: StackId, foundation: u8) -> Result<(), MoveError> {
        self.move_cards(from, 1, StackId::Foundation(foundation))
    }

    /// Move the top card of `from` onto the first foundation that takes it.
    ///
    /// Returns the foundation it landed on.
    pub fn auto_move_to_foundation(&mut self, from: StackId) -> Result<StackId, MoveError> {
        self.ensure_no_drag()?;
        let card = *self.table[from].top_card().ok_or(MoveError::EmptySource)?;
        let target = StackId::foundations()
            .find(|&id| self.table[id].can_accept(&card))
            .ok_or(MoveError::IllegalMove)?;
        self.move_cards(from, 1, target)?;
        Ok(target)
    }

    /// Move the top `count` cards of `from` onto tableau `to` as one run.
    pub fn move_run(&mut self, from: StackId, count: usize, to: StackId) -> Result<(), MoveError> {
        if to.kind() != StackKind::Tableau {
            return Err(MoveError::IllegalMove);
        }
        self.move_cards(from, count, to)
    }

    /// Validate and perform a move of the top `count` cards.
    ///
    /// Sources are tableau, talon, or foundation; only tableaus give up
    /// more than one card at a time. The exposed card on the source is
    /// turned face up.
    pub fn move_cards(
        &mut self,
        from: StackId,
        count: usize,
        to: StackId,
    ) -> Result<(), MoveError> {
        self.ensure_no_drag()?;
        self.validate_move(from, count, to)?;

        perform_move(&mut self.table, &mut self.history, |table| {
            moves::move_run(table, from, count, to, true);
        });
        debug!(%from, %to, count, "move");
        Ok(())
    }

    fn validate_move(&self, from: StackId, count: usize, to: StackId) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::IllegalMove);
        }
        validate_lift(&self.table, from, count)?;

        let run = &self.table[from].cards()[self.table[from].len() - count..];
        if !self.table[to].can_accept_sequence(run) {
            return Err(MoveError::IllegalMove);
        }
        Ok(())
    }

    // === Drag Gestures ===

    /// Lift the top `count` cards of `from` onto the drag stack.
    ///
    /// The run keeps its order and nothing is exposed on the origin until
    /// the drop succeeds.
    pub fn begin_drag(&mut self, from: StackId, count: usize) -> Result<(), MoveError> {
        self.ensure_no_drag()?;
        validate_lift(&self.table, from, count)?;

        moves::move_run(&mut self.table, from, count, StackId::Drag, false);
        self.drag = Some(DragOrigin { from, count });
        debug!(%from, count, "drag started");
        Ok(())
    }

    /// The stack the current drag started from, if any.
    #[must_use]
    pub fn drag_origin(&self) -> Option<StackId> {
        self.drag.map(|d| d.from)
    }

    /// Return dragged cards to their origin. History is not touched.
    pub fn cancel_drag(&mut self) -> Result<(), MoveError> {
        let origin = self.drag.take().ok_or(MoveError::NoDragInProgress)?;
        moves::move_run(&mut self.table, StackId::Drag, origin.count, origin.from, false);
        debug!(from = %origin.from, "drag cancelled");
        Ok(())
    }

    /// Drop the dragged cards onto `to`.
    ///
    /// On success this is one undoable move. If `to` does not accept the
    /// run, the cards go back to their origin and the error is returned.
    pub fn drop_drag(&mut self, to: StackId) -> Result<(), MoveError> {
        let origin = self.drag.ok_or(MoveError::NoDragInProgress)?;
        self.cancel_drag()?;
        self.move_cards(origin.from, origin.count, to)
    }

    fn ensure_no_drag(&self) -> Result<(), MoveError> {
        if self.drag.is_some() {
            return Err(MoveError::DragInProgress);
        }
        Ok(())
    }

    // === History ===

    /// Undo the last move. `Ok(false)` if there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, MoveError> {
        self.ensure_no_drag()?;
        Ok(self.history.perform_undo(&mut self.table))
    }

    /// Redo the last undone move. `Ok(false)` if there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, MoveError> {
        self.ensure_no_drag()?;
        Ok(self.history.perform_redo(&mut self.table))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.drag.is_none() && self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.drag.is_none() && self.history.can_redo()
    }

    // === Queries ===

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.table.is_won()
    }

    /// Verify the one-deck invariant, and that the drag stack is empty
    /// whenever no drag is in progress.
    pub fn check_invariants(&self) -> Result<(), TableError> {
        self.table.check_invariants()?;
        if self.drag.is_none() && !self.table.drag().is_empty() {
            return Err(TableError::DragNotEmpty);
        }
        Ok(())
    }
}

/// Check that the top `count` cards of `from` may be picked up.
fn validate_lift(table: &Table, from: StackId, count: usize) -> Result<(), MoveError> {
    match from.kind() {
        StackKind::Tableau | StackKind::Talon | StackKind::Foundation => {}
        StackKind::Stock | StackKind::Drag => return Err(MoveError::IllegalMove),
    }

    let stack = &table[from];
    if count == 0 || stack.len() < count {
        return Err(MoveError::EmptySource);
    }
    if count > 1 && from.kind() != StackKind::Tableau {
        return Err(MoveError::InvalidRun);
    }

    let run = &stack.cards()[stack.len() - count..];
    if !run.iter().all(|c| c.face_up) || !rules::is_valid_run(run) {
        return Err(MoveError::InvalidRun);
    }
    Ok(())
}
