//! In-memory script execution context

use varfilter_domain::DomainResult;

use crate::filter::{HandlerSet, UnresolvedPolicy, expand};
use crate::ports::ExecutionContext;

/// The state a running script sees: its own handler-set slot and the policy
/// it expands strings with.
///
/// Each concurrently running script owns its own context; nothing here is
/// shared with other contexts or with the engine.
#[derive(Debug, Clone)]
pub struct ScriptContext {
    name: String,
    handlers: HandlerSet,
    policy: UnresolvedPolicy,
}

impl ScriptContext {
    /// Creates a context with no handlers.
    pub fn new(name: impl Into<String>, policy: UnresolvedPolicy) -> Self {
        Self {
            name: name.into(),
            handlers: HandlerSet::new(),
            policy,
        }
    }

    /// Sets the initial handler set.
    #[must_use]
    pub fn with_handlers(mut self, handlers: HandlerSet) -> Self {
        self.handlers = handlers;
        self
    }

    /// The script's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expands `template` with whatever handlers are currently active.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn expand(&self, template: &str) -> DomainResult<String> {
        expand(template, &self.handlers, self.policy)
    }
}

impl ExecutionContext for ScriptContext {
    fn handlers(&self) -> HandlerSet {
        self.handlers.clone()
    }

    fn set_handlers(&mut self, handlers: HandlerSet) {
        self.handlers = handlers;
    }
}
