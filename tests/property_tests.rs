//! Property tests: arbitrary play never breaks the one-deck invariant, and
//! history always replays exactly.

use proptest::prelude::*;

use klondike_core::core::{SessionConfig, StackId};
use klondike_core::engine::Session;
use klondike_core::history::Snapshot;

/// One player-level operation. Invalid ones are simply rejected.
#[derive(Clone, Debug)]
enum Op {
    Draw,
    Recycle,
    ToFoundation(StackId),
    Run { from: u8, count: usize, to: u8 },
    DragCancel { from: u8, count: usize },
    DragDrop { from: u8, count: usize, to: StackId },
    Undo,
    Redo,
}

fn source() -> impl Strategy<Value = StackId> {
    prop_oneof![
        (0u8..7).prop_map(StackId::Tableau),
        Just(StackId::Talon),
        (0u8..4).prop_map(StackId::Foundation),
    ]
}

fn target() -> impl Strategy<Value = StackId> {
    prop_oneof![(0u8..7).prop_map(StackId::Tableau), (0u8..4).prop_map(StackId::Foundation)]
}

fn move_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Draw),
        1 => Just(Op::Recycle),
        3 => source().prop_map(Op::ToFoundation),
        3 => (0u8..7, 1usize..5, 0u8..7).prop_map(|(from, count, to)| Op::Run { from, count, to }),
        1 => (0u8..7, 1usize..4).prop_map(|(from, count)| Op::DragCancel { from, count }),
        2 => (0u8..7, 1usize..4, target())
            .prop_map(|(from, count, to)| Op::DragDrop { from, count, to }),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => move_op(),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

/// Apply `op`, returning whether it recorded a new history entry.
fn apply(session: &mut Session, op: &Op) -> bool {
    match *op {
        Op::Draw => session.draw_from_stock().is_ok(),
        Op::Recycle => session.recycle_talon().is_ok(),
        Op::ToFoundation(from) => session.auto_move_to_foundation(from).is_ok(),
        Op::Run { from, count, to } => session
            .move_run(StackId::Tableau(from), count, StackId::Tableau(to))
            .is_ok(),
        Op::DragCancel { from, count } => {
            if session.begin_drag(StackId::Tableau(from), count).is_ok() {
                session.cancel_drag().expect("drag was started");
            }
            false
        }
        Op::DragDrop { from, count, to } => {
            session.begin_drag(StackId::Tableau(from), count).is_ok()
                && session.drop_drag(to).is_ok()
        }
        Op::Undo => {
            let _ = session.undo();
            false
        }
        Op::Redo => {
            let _ = session.redo();
            false
        }
    }
}

fn new_session(seed: u64) -> Session {
    let config = SessionConfig::default().with_seed(seed).with_max_undo_depth(1000);
    let mut session = Session::new(config);
    session.deal_next().expect("shuffled deck is complete");
    session
}

proptest! {
    /// The table always holds each of the 52 cards exactly once, and the
    /// drag stack is empty between operations.
    #[test]
    fn prop_deck_invariant(seed in any::<u64>(), ops in prop::collection::vec(any_op(), 0..120)) {
        let mut session = new_session(seed);

        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(session.check_invariants(), Ok(()));
            prop_assert!(session.table().drag().is_empty());
        }
    }

    /// Undoing every recorded move restores the deal exactly; redoing them
    /// all reproduces the final table exactly.
    #[test]
    fn prop_undo_redo_round_trip(
        seed in any::<u64>(),
        ops in prop::collection::vec(move_op(), 0..120),
    ) {
        let mut session = new_session(seed);
        let start = Snapshot::capture(session.table());

        let recorded = ops.iter().filter(|op| apply(&mut session, op)).count();
        prop_assert_eq!(session.history().undo_depth(), recorded);
        let end = Snapshot::capture(session.table());

        for _ in 0..recorded {
            prop_assert_eq!(session.undo(), Ok(true));
        }
        prop_assert_eq!(session.undo(), Ok(false));
        prop_assert_eq!(Snapshot::capture(session.table()), start);

        for _ in 0..recorded {
            prop_assert_eq!(session.redo(), Ok(true));
        }
        prop_assert_eq!(session.redo(), Ok(false));
        prop_assert_eq!(Snapshot::capture(session.table()), end);
    }

    /// Any new move after an undo leaves nothing to redo.
    #[test]
    fn prop_new_move_invalidates_redo(seed in any::<u64>(), draws in 1usize..20) {
        let mut session = new_session(seed);
        for _ in 0..draws {
            session.draw_from_stock().unwrap();
        }
        prop_assert_eq!(session.undo(), Ok(true));
        prop_assert!(session.can_redo());

        session.draw_from_stock().unwrap();
        prop_assert!(!session.can_redo());
        prop_assert_eq!(session.history().redo_depth(), 0);
    }
}
