//! Domain error types

use thiserror::Error;

/// Errors raised while resolving a variable.
///
/// The filter itself never produces these for unknown names; they come from
/// the collaborators a handler consults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configuration store failed to look up a key.
    #[error("configuration lookup failed for '{key}': {message}")]
    ConfigStore {
        /// The key being looked up.
        key: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// A host or directory accessor failed.
    #[error("accessor '{name}' failed: {message}")]
    Accessor {
        /// The accessor (variable) name.
        name: String,
        /// Description of the underlying failure.
        message: String,
    },
}

impl DomainError {
    /// Builds an accessor error from any displayable cause.
    pub fn accessor(name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Accessor {
            name: name.into(),
            message: cause.to_string(),
        }
    }

    /// Builds a configuration store error from any displayable cause.
    pub fn config_store(key: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::ConfigStore {
            key: key.into(),
            message: cause.to_string(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
