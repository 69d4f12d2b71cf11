//! Resolved artifacts as handed over by the build tool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use xdep_coords::{ArtifactCoords, ArtifactKey};

/// An artifact the build tool resolved, with its location on disk.
///
/// The declared type (`jar`, `pom`, ...) is carried by the coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub coords: ArtifactCoords,
    pub path: PathBuf,
}

impl ResolvedArtifact {
    pub fn new(coords: ArtifactCoords, path: impl Into<PathBuf>) -> Self {
        Self {
            coords,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared type, which decides whether a file is read as an archive.
    pub fn extension(&self) -> &str {
        self.coords.artifact_type()
    }

    pub fn key(&self) -> ArtifactKey {
        self.coords.key()
    }
}
