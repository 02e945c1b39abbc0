//! Application error types

use thiserror::Error;
use varfilter_domain::DomainError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A resolution error reported by a handler's collaborator.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Expansion left placeholders unresolved where completeness was required.
    #[error("unresolved variables: {}", .0.join(", "))]
    Unresolved(Vec<String>),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
