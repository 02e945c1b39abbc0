//! Package handler
//!
//! Answers `version` and `buildir` for one bound package.

use std::sync::Arc;

use varfilter_domain::{DomainResult, Value};

use super::handler::Handler;
use crate::ports::Package;

/// Handler name under which a package handler is installed.
pub const PACKAGE_HANDLER: &str = "package";

/// A handler bound to a single package.
///
/// **Not cacheable.** Build a new one for every substitution call and drop
/// it when the call ends: reusing it for another package would report the
/// wrong version. Both variables are read from the package at resolution
/// time, so changes made after construction are observed.
pub struct PackageHandler {
    package: Arc<dyn Package>,
}

impl PackageHandler {
    /// Binds a new handler to `package`.
    #[must_use]
    pub fn new(package: Arc<dyn Package>) -> Self {
        Self { package }
    }
}

impl Handler for PackageHandler {
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        let value = match variable {
            "version" => self.package.version_str(),
            "buildir" => self.package.buildir().to_string_lossy().into_owned(),
            _ => return Ok(None),
        };
        Ok(Some(Value::String(value)))
    }
}
