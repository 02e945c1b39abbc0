//! Scope control for execution contexts
//!
//! Entering a scope captures the context's active handler set and installs a
//! new one; the captured set is put back when the [`ScopeFrame`] is dropped.
//! Because restoration lives in `Drop`, it happens on every exit path: normal
//! return, an `Err` result, a panic unwinding through the body, or an async
//! body whose future is dropped before completion.
//!
//! Frames hold the context by exclusive borrow, so nested scopes can only be
//! entered through the outer frame and always unwind last-in first-out.

use std::ops::{Deref, DerefMut};

use super::handler::HandlerSet;
use crate::ports::ExecutionContext;

/// An active scope on an execution context.
pub struct ScopeFrame<'c, C: ExecutionContext> {
    context: &'c mut C,
    saved: Option<HandlerSet>,
}

impl<'c, C: ExecutionContext> ScopeFrame<'c, C> {
    /// Captures `context`'s handler set and installs `handlers` in its place.
    pub fn enter(context: &'c mut C, handlers: HandlerSet) -> Self {
        let saved = context.handlers();
        tracing::debug!(saved = ?saved, installed = ?handlers, "entering handler scope");
        context.set_handlers(handlers);
        Self {
            context,
            saved: Some(saved),
        }
    }

    /// The handler set that will be restored on exit.
    #[must_use]
    pub fn saved(&self) -> Option<&HandlerSet> {
        self.saved.as_ref()
    }
}

impl<C: ExecutionContext> Deref for ScopeFrame<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: ExecutionContext> DerefMut for ScopeFrame<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: ExecutionContext> Drop for ScopeFrame<'_, C> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            tracing::debug!(restored = ?saved, "leaving handler scope");
            self.context.set_handlers(saved);
        }
    }
}

/// Runs `body` with `handlers` active on `context`, then restores the
/// previous set.
///
/// The body's result is returned unchanged.
pub fn with_scope<C, R>(
    context: &mut C,
    handlers: HandlerSet,
    body: impl FnOnce(&mut C) -> R,
) -> R
where
    C: ExecutionContext,
{
    let mut frame = ScopeFrame::enter(context, handlers);
    body(&mut *frame)
}

/// Async variant of [`with_scope`].
///
/// If the returned future is dropped before it completes, the previous set
/// is restored at that point.
pub async fn with_scope_async<C, R>(
    context: &mut C,
    handlers: HandlerSet,
    body: impl AsyncFnOnce(&mut C) -> R,
) -> R
where
    C: ExecutionContext,
{
    let mut frame = ScopeFrame::enter(context, handlers);
    body(&mut *frame).await
}
