//! Filter engine
//!
//! Expands `${variable}` placeholders through a handler set.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use varfilter_domain::{DomainResult, render};

use super::common::CommonHandler;
use super::handler::{Handler, HandlerSet};
use super::package::{PACKAGE_HANDLER, PackageHandler};
use super::parser::{Token, tokenize};
use super::scope::with_scope;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{ConfigStore, ExecutionContext, HostEnvironment, Package};

/// Handler name under which [`FilterEngine::standard`] installs the common
/// handler.
pub const COMMON_HANDLER: &str = "common";

/// What to emit for a placeholder no handler can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Leave the original `${name}` text in the output.
    #[default]
    Keep,
    /// Replace the placeholder with nothing.
    Empty,
}

/// Result of expanding a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionResult {
    /// The expanded string.
    pub expanded: String,

    /// Names of placeholders that were resolved, in order of appearance.
    pub resolved: Vec<String>,

    /// Names of placeholders that could not be resolved.
    pub unresolved: Vec<String>,

    /// Whether every placeholder was resolved.
    pub is_complete: bool,
}

impl ExpansionResult {
    /// Returns the count of resolved placeholders.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Returns the count of unresolved placeholders.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    /// Returns the expanded string if every placeholder was resolved.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unresolved` listing the missing names.
    pub fn into_complete(self) -> ApplicationResult<String> {
        if self.is_complete {
            Ok(self.expanded)
        } else {
            Err(ApplicationError::Unresolved(self.unresolved))
        }
    }
}

/// Expands `template` through `handlers`, reporting what was resolved.
///
/// # Errors
///
/// Propagates the first handler error; partially expanded output is
/// discarded.
pub fn expand_detailed(
    template: &str,
    handlers: &HandlerSet,
    policy: UnresolvedPolicy,
) -> DomainResult<ExpansionResult> {
    let mut expanded = String::with_capacity(template.len());
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    for token in tokenize(template) {
        match token {
            Token::Text(span) => expanded.push_str(&template[span]),
            Token::Escape(_) => expanded.push('$'),
            Token::Placeholder(reference) => {
                match handlers.resolve(&reference.name)?.as_ref().and_then(render) {
                    Some(text) => {
                        expanded.push_str(&text);
                        resolved.push(reference.name);
                    }
                    None => {
                        if policy == UnresolvedPolicy::Keep {
                            expanded.push_str(&template[reference.span]);
                        }
                        tracing::debug!(variable = %reference.name, "variable unresolved");
                        unresolved.push(reference.name);
                    }
                }
            }
        }
    }

    Ok(ExpansionResult {
        expanded,
        resolved,
        is_complete: unresolved.is_empty(),
        unresolved,
    })
}

/// Expands `template` through `handlers`.
///
/// # Errors
///
/// Propagates the first handler error.
pub fn expand(
    template: &str,
    handlers: &HandlerSet,
    policy: UnresolvedPolicy,
) -> DomainResult<String> {
    expand_detailed(template, handlers, policy).map(|r| r.expanded)
}

/// The template filter: a handler set plus an unresolved policy.
///
/// One engine is built when the process starts and passed by reference to
/// whatever expands strings; it lives for the rest of the process. Expansion
/// takes `&self`, so concurrent callers may share it. Changing its handlers
/// takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    handlers: HandlerSet,
    policy: UnresolvedPolicy,
}

impl FilterEngine {
    /// Creates an engine with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over an existing handler set.
    #[must_use]
    pub fn with_handlers(handlers: HandlerSet) -> Self {
        Self {
            handlers,
            policy: UnresolvedPolicy::default(),
        }
    }

    /// Creates the general-purpose engine: a single common handler over the
    /// given configuration store and host accessors.
    #[must_use]
    pub fn standard(config: Arc<dyn ConfigStore>, host: Arc<dyn HostEnvironment>) -> Self {
        Self::with_handlers(
            HandlerSet::new().with(COMMON_HANDLER, CommonHandler::new(config, host)),
        )
    }

    /// Sets the unresolved policy.
    #[must_use]
    pub fn with_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the unresolved policy.
    #[must_use]
    pub const fn policy(&self) -> UnresolvedPolicy {
        self.policy
    }

    /// Returns the engine's handler set.
    #[must_use]
    pub const fn handlers(&self) -> &HandlerSet {
        &self.handlers
    }

    /// Binds or unbinds a handler permanently. See [`HandlerSet::register`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Option<Arc<dyn Handler>>,
    ) -> Option<Arc<dyn Handler>> {
        self.handlers.register(name, handler)
    }

    /// Expands `template` with the engine's handlers.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn expand(&self, template: &str) -> DomainResult<String> {
        expand(template, &self.handlers, self.policy)
    }

    /// Like [`expand`](Self::expand) but reports resolved and unresolved
    /// names.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn expand_detailed(&self, template: &str) -> DomainResult<ExpansionResult> {
        expand_detailed(template, &self.handlers, self.policy)
    }

    /// Returns the engine's handlers plus, if given, a fresh package handler
    /// bound to `package`. The engine itself is not modified.
    #[must_use]
    pub fn handlers_for(&self, package: Option<Arc<dyn Package>>) -> HandlerSet {
        let mut handlers = self.handlers.clone();
        if let Some(package) = package {
            handlers.register(
                PACKAGE_HANDLER,
                Some(Arc::new(PackageHandler::new(package))),
            );
        }
        handlers
    }

    /// Expands `template` with a `package` handler available for this call
    /// only.
    ///
    /// The package handler lives in a per-call copy of the handler set, so
    /// concurrent calls for different packages never see each other's
    /// values.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn handle(&self, template: &str, package: Arc<dyn Package>) -> DomainResult<String> {
        expand(template, &self.handlers_for(Some(package)), self.policy)
    }

    /// Registers `handler` under `name` until the returned guard is dropped,
    /// then restores whatever was bound before (or removes the name).
    pub fn with_transient(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> TransientHandler<'_> {
        let name = name.into();
        tracing::debug!(handler = %name, "registering transient handler");
        let previous = self.handlers.register(name.clone(), Some(handler));
        TransientHandler {
            engine: self,
            name,
            previous,
        }
    }

    /// Runs a unit of script work on `context` with the engine's handlers
    /// (and a package handler, if given) installed, restoring the context's
    /// own handlers afterwards on every exit path.
    pub fn call_in_scope<C, R>(
        &self,
        context: &mut C,
        package: Option<Arc<dyn Package>>,
        body: impl FnOnce(&mut C) -> R,
    ) -> R
    where
        C: ExecutionContext,
    {
        with_scope(context, self.handlers_for(package), body)
    }
}

/// Guard returned by [`FilterEngine::with_transient`].
///
/// Dereferences to the engine so it can be used while the transient handler
/// is installed.
#[must_use = "the transient handler is removed as soon as the guard is dropped"]
pub struct TransientHandler<'e> {
    engine: &'e mut FilterEngine,
    name: String,
    previous: Option<Arc<dyn Handler>>,
}

impl Deref for TransientHandler<'_> {
    type Target = FilterEngine;

    fn deref(&self) -> &FilterEngine {
        self.engine
    }
}

impl DerefMut for TransientHandler<'_> {
    fn deref_mut(&mut self) -> &mut FilterEngine {
        self.engine
    }
}

impl Drop for TransientHandler<'_> {
    fn drop(&mut self) {
        tracing::debug!(handler = %self.name, "removing transient handler");
        let previous = self.previous.take();
        self.engine
            .handlers
            .register(std::mem::take(&mut self.name), previous);
    }
}
