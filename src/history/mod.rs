//! Undo/redo history.
//!
//! ## Key Types
//!
//! - `Snapshot`: Immutable capture of every stack except Drag
//! - `UndoHistory`: Bounded undo and redo logs of snapshots

pub mod manager;
pub mod snapshot;

pub use manager::UndoHistory;
pub use snapshot::Snapshot;
