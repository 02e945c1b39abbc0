//! Layered, file-backed configuration store.
//!
//! Sources are applied in the order they are added, later ones overriding
//! earlier ones. The usual stack is:
//! 1. global file: `<globaldir>/config.{toml,json,yaml,...}`
//! 2. project file: `<configdir>/config.{toml,json,yaml,...}`
//! 3. an extra file named on the command line (`--config ci.toml`)
//! 4. environment variables (`VARFILTER_MODE=release` sets `mode`)
//! 5. explicit overrides (`--define mode=release`)
//!
//! Dotted keys (`toolchain.cc`) address nested tables.

use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use varfilter_application::ports::ConfigStore;
use varfilter_domain::{DomainError, DomainResult, Value};

use crate::error::InfrastructureResult;

/// Base name of configuration files inside the global and config directories.
pub const CONFIG_FILE_STEM: &str = "config";

/// Returns true if `key` can be looked up in a file-backed store.
///
/// Keys are one or more dot-separated segments of ASCII letters, digits,
/// `_` or `-`. Anything else (`env:PATH`, `a..b`) is never configured.
#[must_use]
pub fn is_config_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

/// A configuration store over merged file, environment and override sources.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    config: Config,
}

impl FileConfigStore {
    /// Returns a builder with no sources.
    #[must_use]
    pub fn builder() -> FileConfigStoreBuilder {
        FileConfigStoreBuilder {
            inner: Config::builder(),
        }
    }

    /// Returns a builder preloaded with the standard stack: optional global
    /// and project files, then `extra` (which must exist) if given, then
    /// environment variables prefixed with `env_prefix`.
    ///
    /// Overrides added afterwards with [`FileConfigStoreBuilder::define`]
    /// win over every layer.
    #[must_use]
    pub fn layered(
        global_dir: &Path,
        config_dir: &Path,
        extra: Option<&Path>,
        env_prefix: &str,
    ) -> FileConfigStoreBuilder {
        let mut builder = Self::builder()
            .optional_file_stem(&global_dir.join(CONFIG_FILE_STEM))
            .optional_file_stem(&config_dir.join(CONFIG_FILE_STEM));
        if let Some(path) = extra {
            builder = builder.file(path);
        }
        builder.env_prefix(env_prefix)
    }

    /// Wraps an already built configuration.
    #[must_use]
    pub const fn from_config(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        if !is_config_key(key) {
            return Ok(None);
        }
        match self.config.get::<Value>(key) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(DomainError::config_store(key, e)),
        }
    }
}

/// Builder for [`FileConfigStore`].
#[derive(Debug)]
pub struct FileConfigStoreBuilder {
    inner: ConfigBuilder<DefaultState>,
}

impl FileConfigStoreBuilder {
    /// Adds a file that must exist; its format comes from its extension.
    #[must_use]
    pub fn file(mut self, path: &Path) -> Self {
        self.inner = self.inner.add_source(File::from(path));
        self
    }

    /// Adds `<stem>.<ext>` for whichever supported extension exists, if any.
    #[must_use]
    pub fn optional_file_stem(mut self, stem: &Path) -> Self {
        tracing::debug!(stem = %stem.display(), "adding optional config source");
        self.inner = self
            .inner
            .add_source(File::with_name(&stem.to_string_lossy()).required(false));
        self
    }

    /// Adds an environment variable source.
    #[must_use]
    pub fn environment(mut self, source: Environment) -> Self {
        self.inner = self.inner.add_source(source);
        self
    }

    /// Adds environment variables named `<PREFIX>_<KEY>`, parsing numbers and
    /// booleans.
    #[must_use]
    pub fn env_prefix(self, prefix: &str) -> Self {
        self.environment(Environment::with_prefix(prefix).try_parsing(true))
    }

    /// Sets `key` to `value`, overriding every source.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid configuration path.
    pub fn define(mut self, key: &str, value: &str) -> InfrastructureResult<Self> {
        self.inner = self.inner.set_override(key, value)?;
        Ok(self)
    }

    /// Merges all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or any source fails
    /// to parse.
    pub fn build(self) -> InfrastructureResult<FileConfigStore> {
        Ok(FileConfigStore::from_config(self.inner.build()?))
    }
}
