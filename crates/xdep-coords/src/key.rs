//! Version-less artifact identity.
//!
//! Grammar: `group:artifact[:classifier[:type]]`. The classifier defaults to
//! empty and the type to [`DEFAULT_TYPE`](crate::DEFAULT_TYPE).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_TYPE;
use crate::error::{Error, Result};

/// Identity of an artifact without its version.
///
/// Two artifacts that differ only in version share a key, which is what
/// presence checks compare.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactKey {
    group_id: String,
    artifact_id: String,
    classifier: String,
    artifact_type: String,
}

impl ArtifactKey {
    /// Build a key from its parts. A `None` classifier is stored as empty.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: Option<&str>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: classifier.unwrap_or_default().to_string(),
            artifact_type: artifact_type.into(),
        }
    }

    /// Key with no classifier and the default type.
    pub fn of(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self::new(group_id, artifact_id, None, DEFAULT_TYPE)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Classifier, empty when the artifact has none.
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Parse a key string.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(Error::key(
                input,
                "expected group:artifact[:classifier[:type]]",
            ));
        }
        if parts.iter().any(|p| p.chars().any(char::is_whitespace)) {
            return Err(Error::key(input, "segments must not contain whitespace"));
        }
        if parts[0].is_empty() {
            return Err(Error::key(input, "group is empty"));
        }
        if parts[1].is_empty() {
            return Err(Error::key(input, "artifact is empty"));
        }
        let classifier = parts.get(2).copied().unwrap_or_default();
        let artifact_type = match parts.get(3).copied() {
            Some(t) if t.is_empty() => return Err(Error::key(input, "type is empty")),
            Some(t) => t,
            None => DEFAULT_TYPE,
        };
        Ok(Self::new(parts[0], parts[1], Some(classifier), artifact_type))
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if self.artifact_type != DEFAULT_TYPE {
            write!(f, ":{}:{}", self.classifier, self.artifact_type)
        } else if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)
        } else {
            Ok(())
        }
    }
}

impl FromStr for ArtifactKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArtifactKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ArtifactKey> for String {
    fn from(key: ArtifactKey) -> Self {
        key.to_string()
    }
}
