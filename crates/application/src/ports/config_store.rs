//! Configuration store port
//!
//! The user/project configuration consulted before any built-in variable.

use varfilter_domain::{DomainResult, Value};

/// Read-only key/value configuration lookup.
pub trait ConfigStore: Send + Sync {
    /// Looks up `key`.
    ///
    /// Returns `Ok(None)` when the key is not configured.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConfigStore` if the lookup itself fails.
    fn get(&self, key: &str) -> DomainResult<Option<Value>>;
}

/// An empty configuration: every key is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConfig;

impl ConfigStore for NoConfig {
    fn get(&self, _key: &str) -> DomainResult<Option<Value>> {
        Ok(None)
    }
}
