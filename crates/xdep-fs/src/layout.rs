//! Artifact layout detection
//!
//! A resolved artifact is either an exploded directory (e.g. a project's
//! class output), an archive file, or something that cannot carry a
//! descriptor at all.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// How an artifact is represented on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLayout {
    /// The location does not exist
    Missing,
    /// Exploded directory
    Directory,
    /// Regular file with an archive type
    Archive,
    /// Regular file of a type that is not opened
    Opaque,
}

impl ArtifactLayout {
    /// Inspect `location` and classify it.
    ///
    /// A location that does not exist is [`ArtifactLayout::Missing`], not an
    /// error; any other metadata failure is reported.
    pub fn detect(location: &Path, declared_type: &str, archive_types: &[String]) -> Result<Self> {
        let metadata = match fs::metadata(location) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(e) => return Err(Error::io(location, e)),
        };

        if metadata.is_dir() {
            Ok(Self::Directory)
        } else if archive_types.iter().any(|t| t == declared_type) {
            Ok(Self::Archive)
        } else {
            Ok(Self::Opaque)
        }
    }
}

impl std::fmt::Display for ArtifactLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Directory => "directory",
            Self::Archive => "archive",
            Self::Opaque => "opaque",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn jar_only() -> Vec<String> {
        vec!["jar".to_string()]
    }

    #[test]
    fn test_missing_location() {
        let dir = tempdir().unwrap();
        let layout = ArtifactLayout::detect(&dir.path().join("gone.jar"), "jar", &jar_only());
        assert_eq!(layout.unwrap(), ArtifactLayout::Missing);
    }

    #[test]
    fn test_directory_ignores_declared_type() {
        let dir = tempdir().unwrap();
        let layout = ArtifactLayout::detect(dir.path(), "pom", &jar_only()).unwrap();
        assert_eq!(layout, ArtifactLayout::Directory);
    }

    #[test]
    fn test_file_classified_by_declared_type() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("thing.bin");
        fs::write(&file, b"x").unwrap();

        assert_eq!(
            ArtifactLayout::detect(&file, "jar", &jar_only()).unwrap(),
            ArtifactLayout::Archive
        );
        assert_eq!(
            ArtifactLayout::detect(&file, "pom", &jar_only()).unwrap(),
            ArtifactLayout::Opaque
        );
    }
}
