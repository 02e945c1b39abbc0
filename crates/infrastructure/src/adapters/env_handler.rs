//! Process environment handler

use varfilter_application::filter::Handler;
use varfilter_domain::{DomainResult, Value};

/// Prefix of variables answered by [`EnvHandler`].
pub const ENV_PREFIX: &str = "env:";

/// Resolves `env:NAME` to the value of the environment variable `NAME`.
///
/// Unset variables and names without the prefix are absent. Values that are
/// not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHandler;

impl EnvHandler {
    /// Creates a new environment handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Handler for EnvHandler {
    fn resolve(&self, variable: &str) -> DomainResult<Option<Value>> {
        let Some(name) = variable.strip_prefix(ENV_PREFIX) else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }
        Ok(std::env::var_os(name).map(|v| Value::String(v.to_string_lossy().into_owned())))
    }
}
