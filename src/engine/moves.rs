//! Card transfer primitives and the undo-recording entry point.
//!
//! None of the transfers here consult legality rules; callers check
//! `can_accept` / `can_accept_sequence` first. Player-visible moves must go
//! through `perform_move` so that they can be undone.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::card::Card;
use crate::core::config::StackId;
use crate::history::{Snapshot, UndoHistory};
use crate::stacks::Stack;
use crate::table::Table;

/// A run of cards in transit. Tableau runs never exceed 13 cards.
pub type Run = SmallVec<[Card; 13]>;

/// Move the top card of `from` onto `to`.
///
/// The card's face-up flag is set to `face_up`. If `make_new_top_face_up`
/// is set, the card exposed on `from` is turned face up. Does nothing to
/// either stack if `from` is empty.
pub fn transfer_top_card(
    from: &mut Stack,
    to: &mut Stack,
    face_up: bool,
    make_new_top_face_up: bool,
) {
    let Some(card) = from.top_card().copied() else {
        return;
    };
    trace!(card = %card.key(), from = %from.id(), to = %to.id(), "move top card");
    to.add_card(card.with_face_up(face_up));
    from.pop_cards(1, make_new_top_face_up);
}

/// `transfer_top_card` between two stacks of a table.
///
/// Panics if `from == to`.
pub fn move_top_card(
    table: &mut Table,
    from: StackId,
    to: StackId,
    face_up: bool,
    make_new_top_face_up: bool,
) {
    let (src, dst) = table.pair_mut(from, to);
    transfer_top_card(src, dst, face_up, make_new_top_face_up);
}

/// Move every card of `from` onto `to`, one at a time, face down.
///
/// Each successive top card of `from` becomes the new top of `to`, so the
/// relative order is reversed. This is what turns a spent talon back into
/// a stock that deals in the original order.
pub fn copy_cards(table: &mut Table, from: StackId, to: StackId) {
    let (src, dst) = table.pair_mut(from, to);
    for _ in 0..src.len() {
        transfer_top_card(src, dst, false, false);
    }
}

/// Move the top `count` cards of `from` onto `to`, keeping their order.
///
/// Face-up flags are preserved. Panics if `from` holds fewer than `count`
/// cards or if `from == to`.
pub fn move_run(
    table: &mut Table,
    from: StackId,
    count: usize,
    to: StackId,
    make_new_top_face_up: bool,
) {
    let (src, dst) = table.pair_mut(from, to);
    assert!(
        count <= src.len(),
        "Attempted to move {} cards from {} holding {}",
        count,
        from,
        src.len()
    );

    let run: Run = SmallVec::from_slice(&src.cards()[src.len() - count..]);
    src.pop_cards(count, make_new_top_face_up);
    for card in run {
        dst.add_card(card);
    }
    trace!(%from, %to, count, "move run");
}

/// Record the current table in `history`, then run `action` on it.
///
/// This is the entry point for every player-visible move: the snapshot
/// goes onto the undo log (evicting the oldest beyond the cap) and the
/// redo log is cleared before `action` runs.
///
/// Panics if the drag stack is occupied.
pub fn perform_move<R>(
    table: &mut Table,
    history: &mut UndoHistory,
    action: impl FnOnce(&mut Table) -> R,
) -> R {
    history.save_state(Snapshot::capture(table));
    action(table)
}
