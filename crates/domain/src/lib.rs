//! Varfilter Domain - Core value types
//!
//! This crate defines the values a template filter resolves and the
//! tables that bind them to names.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod package;
pub mod resolved;
pub mod value;

pub use error::{DomainError, DomainResult};
pub use package::PackageInfo;
pub use resolved::{Computation, ResolvedValue, ValueTable};
pub use value::{Value, render};
