//! Command implementations

mod inspect;
mod resolve;

use std::path::Path;

use xdep_extensions::ResolverConfig;

use crate::error::Result;

pub use inspect::run_inspect;
pub use resolve::run_resolve;

/// Load the resolver configuration, falling back to defaults.
pub fn load_resolver_config(path: Option<&Path>) -> Result<ResolverConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading resolver config");
            Ok(ResolverConfig::from_path(path)?)
        }
        None => Ok(ResolverConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(load_resolver_config(None).unwrap(), ResolverConfig::default());
    }

    #[test]
    fn test_config_from_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xdep.yaml");
        fs::write(&path, "fail_fast: true\narchive_types: [jar, zip]\n").unwrap();

        let config = load_resolver_config(Some(&path)).unwrap();
        assert!(config.fail_fast);
        assert_eq!(config.archive_types, vec!["jar", "zip"]);
    }
}
