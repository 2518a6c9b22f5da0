//! Card stacks.
//!
//! ## Key Types
//!
//! - `Stack`: Ordered card container with a kind-specific acceptance rule
//! - `StackObserver`: Non-owning refresh hook for views

pub mod observer;
pub mod stack;

pub use observer::StackObserver;
pub use stack::Stack;

// Re-export stack addressing from core for convenience
pub use crate::core::config::{StackId, StackKind};
