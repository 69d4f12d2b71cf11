//! Resolver configuration, usually read from `xdep.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use xdep_fs::{DEFAULT_ARCHIVE_TYPES, DESCRIPTOR_PATH, DescriptorLocator};

use crate::error::{Error, Result};

/// Settings for an [`ExtensionResolver`](crate::ExtensionResolver).
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Relative path of the descriptor inside each artifact.
    pub descriptor_path: String,
    /// Declared artifact types opened as zip archives.
    pub archive_types: Vec<String>,
    /// Stop at the first artifact that fails instead of collecting failures.
    pub fail_fast: bool,
    /// Number of threads used by parallel resolution. `0` and `1` both mean
    /// the calling thread only.
    pub parallelism: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            descriptor_path: DESCRIPTOR_PATH.to_string(),
            archive_types: DEFAULT_ARCHIVE_TYPES.iter().map(|t| t.to_string()).collect(),
            fail_fast: false,
            parallelism: 1,
        }
    }
}

impl ResolverConfig {
    /// Load from a TOML, JSON or YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        xdep_fs::load_config(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build the descriptor locator these settings describe.
    pub fn locator(&self) -> DescriptorLocator {
        DescriptorLocator::new(self.descriptor_path.as_str(), self.archive_types.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ResolverConfig::from_toml("").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.locator().descriptor_path(), DESCRIPTOR_PATH);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ResolverConfig::from_toml(
            r#"
archive_types = ["jar", "zip"]
parallelism = 4
"#,
        )
        .unwrap();
        assert_eq!(config.archive_types, vec!["jar", "zip"]);
        assert_eq!(config.parallelism, 4);
        assert!(!config.fail_fast);
        assert_eq!(config.descriptor_path, DESCRIPTOR_PATH);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ResolverConfig::from_toml("paralelism = 2").is_err());
    }

    #[test]
    fn test_from_path_wraps_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResolverConfig::from_path(&dir.path().join("xdep.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
