//! Template filter
//!
//! Expands `${variable}` placeholders by asking a set of named handlers.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use varfilter_application::filter::{FilterEngine, HandlerSet};
//! use varfilter_domain::{ResolvedValue, ValueTable};
//!
//! let handlers = HandlerSet::new().with(
//!     "build",
//!     ValueTable::new().with("mode", ResolvedValue::literal("release")),
//! );
//! let engine = FilterEngine::with_handlers(handlers);
//!
//! assert_eq!(engine.expand("build/${mode}").unwrap(), "build/release");
//! assert_eq!(engine.expand("build/${arch}").unwrap(), "build/${arch}");
//! ```

pub mod common;
pub mod engine;
pub mod handler;
pub mod package;
pub mod parser;
pub mod scope;

pub use common::{BUILTIN_NAMES, CommonHandler};
pub use engine::{
    COMMON_HANDLER, ExpansionResult, FilterEngine, TransientHandler, UnresolvedPolicy, expand,
    expand_detailed,
};
pub use handler::{FnHandler, Handler, HandlerSet};
pub use package::{PACKAGE_HANDLER, PackageHandler};
pub use parser::{
    PlaceholderReference, Token, extract_variable_names, has_placeholders, parse_placeholders,
    tokenize,
};
pub use scope::{ScopeFrame, with_scope, with_scope_async};
