//! Literal and computed variable values, and the ordered table that binds
//! them to names.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::DomainResult;
use crate::value::Value;

/// A zero-argument computation producing a value on demand.
pub type Computation = Arc<dyn Fn() -> DomainResult<Option<Value>> + Send + Sync>;

/// A value bound to a variable name.
///
/// `Computed` entries are evaluated every time they are resolved. Nothing is
/// memoized, so an accessor reading live state (the current directory, a
/// package that changes between calls) is always observed fresh.
#[derive(Clone)]
pub enum ResolvedValue {
    /// A constant value.
    Literal(Value),
    /// A computation invoked on each resolution.
    Computed(Computation),
}

impl ResolvedValue {
    /// Creates a literal value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a computed value from a closure.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> DomainResult<Option<Value>> + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Produces the value, invoking the computation if there is one.
    ///
    /// # Errors
    ///
    /// Returns whatever error the computation reports.
    pub fn evaluate(&self) -> DomainResult<Option<Value>> {
        match self {
            Self::Literal(value) => Ok(Some(value.clone())),
            Self::Computed(f) => f(),
        }
    }

    /// Returns true if this entry is computed at resolution time.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Debug for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for ResolvedValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// An insertion-ordered table of variable name to [`ResolvedValue`].
///
/// Registering an existing name replaces its entry in place; registering
/// `None` removes it.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    entries: IndexMap<String, ResolvedValue>,
}

impl ValueTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, or removes the binding when `value` is `None`.
    ///
    /// Returns the previous binding, if any. Removing an unbound name is a
    /// no-op.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        value: Option<ResolvedValue>,
    ) -> Option<ResolvedValue> {
        let name = name.into();
        match value {
            Some(value) => self.entries.insert(name, value),
            None => self.entries.shift_remove(&name),
        }
    }

    /// Builder-style variant of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: ResolvedValue) -> Self {
        self.register(name, Some(value));
        self
    }

    /// Resolves `name`, evaluating computed entries.
    ///
    /// # Errors
    ///
    /// Propagates errors from computed entries.
    pub fn resolve(&self, name: &str) -> DomainResult<Option<Value>> {
        match self.entries.get(name) {
            Some(value) => value.evaluate(),
            None => Ok(None),
        }
    }

    /// Returns the raw entry for `name` without evaluating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.entries.get(name)
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
