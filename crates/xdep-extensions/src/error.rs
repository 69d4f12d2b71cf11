use std::path::PathBuf;

use xdep_coords::ArtifactCoords;

/// Errors that can occur while resolving extension descriptors.
///
/// Every variant names the artifact it concerns so a batch of failures can
/// be reported without extra bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The artifact exists but could not be inspected.
    #[error("failed to inspect artifact {coords}: {source}")]
    Locate {
        coords: ArtifactCoords,
        #[source]
        source: xdep_fs::Error,
    },

    /// The descriptor stream could not be read.
    #[error("failed to read descriptor of {extension}: {source}")]
    Read {
        extension: ArtifactCoords,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor has no deployment coordinate.
    #[error("descriptor of {extension} is missing deployment coordinate ('{key}')")]
    MissingDeploymentCoords {
        extension: ArtifactCoords,
        key: &'static str,
    },

    /// A descriptor value is not valid coordinate or key syntax.
    #[error("invalid '{key}' in descriptor of {extension}: {source}")]
    InvalidValue {
        extension: ArtifactCoords,
        key: &'static str,
        #[source]
        source: xdep_coords::Error,
    },

    /// Failed to load resolver configuration.
    #[error("failed to load resolver config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: xdep_fs::Error,
    },
}

impl Error {
    /// Coordinates of the artifact the error concerns, if any.
    pub fn coords(&self) -> Option<&ArtifactCoords> {
        match self {
            Self::Locate { coords, .. } => Some(coords),
            Self::Read { extension, .. }
            | Self::MissingDeploymentCoords { extension, .. }
            | Self::InvalidValue { extension, .. } => Some(extension),
            Self::Config { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
