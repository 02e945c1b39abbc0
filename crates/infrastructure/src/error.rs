//! Infrastructure error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// A configuration source could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A package manifest is missing required fields or is malformed.
    #[error("invalid package manifest '{path}': {message}")]
    Manifest {
        /// Manifest path.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },
}

/// Result type alias for infrastructure operations.
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
