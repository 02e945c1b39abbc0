//! File-backed configuration and package manifests.

mod file_config_store;
mod package_manifest;

pub use file_config_store::{
    CONFIG_FILE_STEM, FileConfigStore, FileConfigStoreBuilder, is_config_key,
};
pub use package_manifest::load_package_manifest;
