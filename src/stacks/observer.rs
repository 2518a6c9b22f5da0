//! Refresh notifications for views that mirror a stack.

use crate::core::config::StackId;

/// Receives a refresh call after every mutating stack operation.
///
/// Stacks hold observers through a `Weak` reference and never keep them
/// alive. Implementations must not call back into the table synchronously.
pub trait StackObserver {
    /// The stack identified by `stack` changed.
    fn refresh(&self, stack: StackId);
}
