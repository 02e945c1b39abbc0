//! Varfilter Application - Filter engine and scope control
//!
//! This crate holds the template filter: the handler registry, the common
//! and package handlers, string expansion, and the scope controller that
//! swaps handler sets on execution contexts. Collaborators are reached
//! through the traits in [`ports`].

pub mod context;
pub mod error;
pub mod filter;
pub mod ports;

pub use context::ScriptContext;
pub use error::{ApplicationError, ApplicationResult};
pub use filter::{ExpansionResult, FilterEngine, HandlerSet, UnresolvedPolicy};
