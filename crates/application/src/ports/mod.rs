//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the filter core and the systems it
//! reads from. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod config_store;
mod execution_context;
mod host;
mod package;

pub use config_store::{ConfigStore, NoConfig};
pub use execution_context::ExecutionContext;
pub use host::HostEnvironment;
pub use package::Package;
