//! Package description

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A package as seen by the filter: a name, a version and a build directory.
///
/// File: any JSON/YAML/TOML manifest, e.g.
/// ```json
/// { "name": "zlib", "version": "1.3.1", "buildir": "build/zlib" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package name.
    pub name: String,

    /// Version string.
    pub version: String,

    /// Build directory.
    #[serde(default = "default_buildir")]
    pub buildir: PathBuf,
}

fn default_buildir() -> PathBuf {
    PathBuf::from("build")
}

impl PackageInfo {
    /// Creates a package description.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        buildir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            buildir: buildir.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_default_buildir() {
        let pkg: PackageInfo =
            serde_json::from_str(r#"{"name": "zlib", "version": "1.3.1"}"#).unwrap();
        assert_eq!(pkg.version, "1.3.1");
        assert_eq!(pkg.buildir, PathBuf::from("build"));
    }
}
