//! Host environment port
//!
//! Accessors for the host identifier and well-known directories. Every call
//! reflects live state; callers must not cache the results.

use std::path::PathBuf;

use varfilter_domain::DomainResult;

/// Host and directory accessors used by the common handler.
pub trait HostEnvironment: Send + Sync {
    /// Identifier of the host platform (e.g. `linux`, `macos`, `windows`).
    fn host(&self) -> String;

    /// Temporary directory.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn tmpdir(&self) -> DomainResult<PathBuf>;

    /// Current working directory of the process.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn curdir(&self) -> DomainResult<PathBuf>;

    /// Directory of the script currently being executed.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn scriptdir(&self) -> DomainResult<PathBuf>;

    /// Directory the tool's own program files live in.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn programdir(&self) -> DomainResult<PathBuf>;

    /// Per-user global directory.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn globaldir(&self) -> DomainResult<PathBuf>;

    /// Per-project configuration directory.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn configdir(&self) -> DomainResult<PathBuf>;

    /// Project root directory.
    ///
    /// # Errors
    /// Returns `DomainError::Accessor` if the directory cannot be determined.
    fn projectdir(&self) -> DomainResult<PathBuf>;
}
