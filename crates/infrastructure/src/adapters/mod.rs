//! Adapters for the host process: directories and environment variables.

mod env_handler;
mod system_host;

pub use env_handler::{ENV_PREFIX, EnvHandler};
pub use system_host::SystemHost;
