//! Dependency notation and descriptor value helpers.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::ArtifactCoords;
use crate::error::Result;
use crate::key::ArtifactKey;

/// Suffix appended to an artifact id to name its capability module.
const CAPABILITY_SUFFIX: &str = "-capability";

/// Group and name of a module, ignoring everything else.
///
/// Used by the coarse existence check, which deliberately matches on less
/// than an [`ArtifactKey`].
pub trait ModuleIdentity {
    fn group(&self) -> &str;
    fn name(&self) -> &str;
}

/// A `group:artifact:version` reference a build tool turns into a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyRequest {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl DependencyRequest {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parse full coordinates and keep only group, artifact and version.
    ///
    /// Classifier and type are accepted by the grammar but not carried over,
    /// since the dependency is requested by module notation.
    pub fn parse(input: &str) -> Result<Self> {
        let coords = ArtifactCoords::parse(input)?;
        Ok(Self::from(&coords))
    }
}

impl From<&ArtifactCoords> for DependencyRequest {
    fn from(coords: &ArtifactCoords) -> Self {
        Self::new(coords.group_id(), coords.artifact_id(), coords.version())
    }
}

impl fmt::Display for DependencyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl ModuleIdentity for DependencyRequest {
    fn group(&self) -> &str {
        &self.group
    }

    fn name(&self) -> &str {
        &self.artifact
    }
}

impl ModuleIdentity for ArtifactCoords {
    fn group(&self) -> &str {
        self.group_id()
    }

    fn name(&self) -> &str {
        self.artifact_id()
    }
}

/// Render coordinates as `group:artifact:version`.
pub fn as_dependency_notation(coords: &ArtifactCoords) -> String {
    DependencyRequest::from(coords).to_string()
}

/// Render the notation of the capability module paired with `coords`.
pub fn as_capability_notation(coords: &ArtifactCoords) -> String {
    format!(
        "{}:{}{}:{}",
        coords.group_id(),
        coords.artifact_id(),
        CAPABILITY_SUFFIX,
        coords.version()
    )
}

/// Split a descriptor value on any run of whitespace.
pub fn split_by_whitespace(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// Parse a dependency-condition value into the set of required keys.
///
/// `None` or a blank value yields an empty set, meaning unconditional.
pub fn parse_dependency_condition(value: Option<&str>) -> Result<BTreeSet<ArtifactKey>> {
    let Some(value) = value else {
        return Ok(BTreeSet::new());
    };
    split_by_whitespace(value)
        .into_iter()
        .map(ArtifactKey::parse)
        .collect()
}
