//! Handlers and the handler registry
//!
//! A [`Handler`] answers variable names; a [`HandlerSet`] is an ordered,
//! named collection of handlers consulted first to last.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use varfilter_domain::{DomainResult, Value, ValueTable};

/// A named unit of resolution logic.
pub trait Handler: Send + Sync {
    /// Resolves `variable`, returning `Ok(None)` if this handler does not
    /// know it.
    ///
    /// # Errors
    ///
    /// Propagates failures of the collaborators the handler consults.
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>>;
}

impl Handler for ValueTable {
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        Self::resolve(self, variable)
    }
}

/// Adapts a closure into a [`Handler`].
pub struct FnHandler<F>(F);

impl<F> FnHandler<F>
where
    F: Fn(&str) -> DomainResult<Option<Value>> + Send + Sync,
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&str) -> DomainResult<Option<Value>> + Send + Sync,
{
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        (self.0)(variable)
    }
}

/// An insertion-ordered registry of handler name to handler.
///
/// Cloning is cheap: handlers are shared. Two sets compare equal when they
/// bind the same names, in the same order, to the same handler instances.
#[derive(Clone, Default)]
pub struct HandlerSet {
    handlers: IndexMap<String, Arc<dyn Handler>>,
}

impl HandlerSet {
    /// Creates an empty handler set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `handler`, or removes the binding when `handler` is
    /// `None`.
    ///
    /// Overwriting keeps the name's position. Returns the previous binding.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Option<Arc<dyn Handler>>,
    ) -> Option<Arc<dyn Handler>> {
        let name = name.into();
        match handler {
            Some(handler) => self.handlers.insert(name, handler),
            None => self.handlers.shift_remove(&name),
        }
    }

    /// Builder-style registration of a concrete handler.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.register(name, Some(Arc::new(handler)));
        self
    }

    /// Resolves `variable` by asking each handler in insertion order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first handler error.
    pub fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        for (name, handler) in &self.handlers {
            if let Some(value) = handler.resolve(variable)? {
                tracing::trace!(variable, handler = %name, "variable resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Returns the handler bound to `name`.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.handlers.get(name)
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns handler names in resolution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Returns the number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl PartialEq for HandlerSet {
    fn eq(&self, other: &Self) -> bool {
        self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(&other.handlers)
                .all(|((a_name, a), (b_name, b))| a_name == b_name && Arc::ptr_eq(a, b))
    }
}

impl Eq for HandlerSet {}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.handlers.keys()).finish()
    }
}
