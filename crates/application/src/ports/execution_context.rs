//! Execution context port
//!
//! A script execution context owns exactly one active handler-set slot. Only
//! the scope controller swaps it.

use crate::filter::HandlerSet;

/// An execution context whose active handler set can be swapped.
pub trait ExecutionContext {
    /// Returns the currently active handler set.
    fn handlers(&self) -> HandlerSet;

    /// Replaces the active handler set.
    fn set_handlers(&mut self, handlers: HandlerSet);
}
