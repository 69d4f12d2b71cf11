//! Versioned artifact coordinates.
//!
//! Grammar: `group:artifact[:classifier[:type]]:version`, three to five
//! colon-separated segments. Group, artifact, version and an explicit type
//! must be non-empty; the classifier may be empty (`g:a::pom:1.0`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_TYPE;
use crate::error::{Error, Result};
use crate::key::ArtifactKey;

/// Fully qualified coordinates of a resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactCoords {
    group_id: String,
    artifact_id: String,
    classifier: String,
    artifact_type: String,
    version: String,
}

impl ArtifactCoords {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: Option<&str>,
        artifact_type: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: classifier.unwrap_or_default().to_string(),
            artifact_type: artifact_type.into(),
            version: version.into(),
        }
    }

    /// Coordinates with no classifier and the default type.
    pub fn jar(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::new(group_id, artifact_id, None, DEFAULT_TYPE, version)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Project onto the version-less identity used for presence checks.
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.as_str(),
            self.artifact_id.as_str(),
            Some(&self.classifier),
            self.artifact_type.as_str(),
        )
    }

    /// Parse a coordinate string.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() < 3 || parts.len() > 5 {
            return Err(Error::coords(
                input,
                "expected group:artifact[:classifier[:type]]:version",
            ));
        }
        if parts.iter().any(|p| p.chars().any(char::is_whitespace)) {
            return Err(Error::coords(input, "segments must not contain whitespace"));
        }

        let (version, head) = parts.split_last().ok_or_else(|| Error::coords(input, "empty"))?;
        if head[0].is_empty() {
            return Err(Error::coords(input, "group is empty"));
        }
        if head[1].is_empty() {
            return Err(Error::coords(input, "artifact is empty"));
        }
        if version.is_empty() {
            return Err(Error::coords(input, "version is empty"));
        }
        let classifier = head.get(2).copied().unwrap_or_default();
        let artifact_type = match head.get(3).copied() {
            Some(t) if t.is_empty() => return Err(Error::coords(input, "type is empty")),
            Some(t) => t,
            None => DEFAULT_TYPE,
        };

        Ok(Self::new(
            head[0],
            head[1],
            Some(classifier),
            artifact_type,
            *version,
        ))
    }
}

impl fmt::Display for ArtifactCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if self.artifact_type != DEFAULT_TYPE {
            write!(f, ":{}:{}", self.classifier, self.artifact_type)?;
        } else if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

impl FromStr for ArtifactCoords {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArtifactCoords {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ArtifactCoords> for String {
    fn from(coords: ArtifactCoords) -> Self {
        coords.to_string()
    }
}
