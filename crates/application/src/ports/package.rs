//! Package port

use std::path::PathBuf;

use varfilter_domain::PackageInfo;

/// The accessors the package handler reads at resolution time.
///
/// Implementations may change between calls (a package being configured
/// picks its version late), so both methods must be cheap and repeatable.
pub trait Package: Send + Sync {
    /// The package version as a string.
    fn version_str(&self) -> String;

    /// The package build directory.
    fn buildir(&self) -> PathBuf;
}

impl Package for PackageInfo {
    fn version_str(&self) -> String {
        self.version.clone()
    }

    fn buildir(&self) -> PathBuf {
        self.buildir.clone()
    }
}
