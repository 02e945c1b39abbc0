//! Varfilter Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod error;
pub mod persistence;

pub use adapters::{ENV_PREFIX, EnvHandler, SystemHost};
pub use error::{InfrastructureError, InfrastructureResult};
pub use persistence::{
    CONFIG_FILE_STEM, FileConfigStore, FileConfigStoreBuilder, is_config_key, load_package_manifest,
};

/// Name of the tool, used for per-user and per-project directory names.
pub const TOOL_NAME: &str = "varfilter";

/// Prefix of environment variables read into the configuration store.
pub const ENV_CONFIG_PREFIX: &str = "VARFILTER";
