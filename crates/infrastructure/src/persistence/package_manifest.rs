//! Package manifest loading.

use std::path::Path;

use config::{Config, File};
use varfilter_domain::PackageInfo;

use crate::error::{InfrastructureError, InfrastructureResult};

/// Loads a package description from a JSON, YAML or TOML manifest.
///
/// # Errors
///
/// Returns `InfrastructureError::Config` if the file cannot be read or
/// parsed, and `InfrastructureError::Manifest` if required fields are
/// missing.
pub fn load_package_manifest(path: &Path) -> InfrastructureResult<PackageInfo> {
    let config = Config::builder().add_source(File::from(path)).build()?;
    let package = config
        .try_deserialize::<PackageInfo>()
        .map_err(|e| InfrastructureError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!(name = %package.name, version = %package.version, "loaded package manifest");
    Ok(package)
}
