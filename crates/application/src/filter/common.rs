//! Common handler
//!
//! Resolves a variable from the configuration store first, so user and
//! project settings override built-ins, then from a fixed table of
//! host/directory accessors evaluated at resolution time.

use std::path::PathBuf;
use std::sync::Arc;

use varfilter_domain::{DomainResult, ResolvedValue, Value, ValueTable};

use super::handler::Handler;
use crate::ports::{ConfigStore, HostEnvironment};

/// Names of the built-in variables, in table order.
pub const BUILTIN_NAMES: &[&str] = &[
    "host",
    "tmpdir",
    "curdir",
    "scriptdir",
    "programdir",
    "globaldir",
    "configdir",
    "projectdir",
];

/// Configuration first, then built-in host and directory variables.
pub struct CommonHandler {
    config: Arc<dyn ConfigStore>,
    builtins: ValueTable,
}

impl CommonHandler {
    /// Creates a common handler over the given collaborators.
    #[must_use]
    pub fn new(config: Arc<dyn ConfigStore>, host: Arc<dyn HostEnvironment>) -> Self {
        Self {
            config,
            builtins: builtin_table(&host),
        }
    }

    /// Returns the built-in table.
    #[must_use]
    pub const fn builtins(&self) -> &ValueTable {
        &self.builtins
    }
}

impl Handler for CommonHandler {
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        if let Some(value) = self.config.get(variable)? {
            return Ok(Some(value));
        }
        self.builtins.resolve(variable)
    }
}

fn path_value(path: PathBuf) -> Option<Value> {
    Some(Value::String(path.to_string_lossy().into_owned()))
}

/// Builds the table of built-in accessors bound to `host`.
fn builtin_table(host: &Arc<dyn HostEnvironment>) -> ValueTable {
    type Accessor = fn(&dyn HostEnvironment) -> DomainResult<PathBuf>;

    let dirs: [(&str, Accessor); 7] = [
        ("tmpdir", |h| h.tmpdir()),
        ("curdir", |h| h.curdir()),
        ("scriptdir", |h| h.scriptdir()),
        ("programdir", |h| h.programdir()),
        ("globaldir", |h| h.globaldir()),
        ("configdir", |h| h.configdir()),
        ("projectdir", |h| h.projectdir()),
    ];

    let mut table = ValueTable::new();
    let h = Arc::clone(host);
    table.register(
        "host",
        Some(ResolvedValue::computed(move || {
            Ok(Some(Value::String(h.host())))
        })),
    );

    for (name, accessor) in dirs {
        let h = Arc::clone(host);
        table.register(
            name,
            Some(ResolvedValue::computed(move || {
                accessor(h.as_ref()).map(path_value)
            })),
        );
    }
    table
}
