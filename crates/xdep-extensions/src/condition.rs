//! Dependency condition evaluation.
//!
//! Two distinct presence checks exist:
//!
//! - **key match** ([`satisfied`], [`PresentArtifacts::satisfies`]) compares
//!   group, artifact, classifier and type; only the version is ignored.
//! - **name match** ([`exists_by_name_only`],
//!   [`PresentArtifacts::contains_module`]) compares group and artifact
//!   name only, for callers holding a coarse dependency reference.

use std::collections::HashSet;

use xdep_coords::{ArtifactKey, ModuleIdentity};
use xdep_fs::ResolvedArtifact;

/// Runtime artifacts of a build, projected once for repeated checks.
#[derive(Debug, Clone, Default)]
pub struct PresentArtifacts {
    keys: HashSet<ArtifactKey>,
    modules: HashSet<(String, String)>,
}

impl PresentArtifacts {
    pub fn new<'a, I>(artifacts: I) -> Self
    where
        I: IntoIterator<Item = &'a ResolvedArtifact>,
    {
        let mut present = Self::default();
        for artifact in artifacts {
            present.keys.insert(artifact.key());
            present.modules.insert((
                artifact.coords.group_id().to_string(),
                artifact.coords.artifact_id().to_string(),
            ));
        }
        present
    }

    /// True when every key in `required` is present. An empty requirement
    /// is always satisfied.
    pub fn satisfies<'k, I>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = &'k ArtifactKey>,
    {
        required.into_iter().all(|key| self.keys.contains(key))
    }

    /// Required keys that are not present.
    pub fn missing<'k, I>(&self, required: I) -> Vec<&'k ArtifactKey>
    where
        I: IntoIterator<Item = &'k ArtifactKey>,
    {
        required
            .into_iter()
            .filter(|key| !self.keys.contains(*key))
            .collect()
    }

    pub fn contains_key(&self, key: &ArtifactKey) -> bool {
        self.keys.contains(key)
    }

    /// Group and name match, regardless of classifier, type or version.
    pub fn contains_module<M: ModuleIdentity + ?Sized>(&self, module: &M) -> bool {
        self.modules
            .contains(&(module.group().to_string(), module.name().to_string()))
    }

    /// Number of distinct artifact keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Whether all `required` keys are among the keys of `present`.
pub fn satisfied<'a, 'k, R, P>(required: R, present: P) -> bool
where
    R: IntoIterator<Item = &'k ArtifactKey>,
    P: IntoIterator<Item = &'a ResolvedArtifact>,
{
    PresentArtifacts::new(present).satisfies(required)
}

/// Whether any artifact in `present` has the group and name of `dependency`.
pub fn exists_by_name_only<'a, P, M>(present: P, dependency: &M) -> bool
where
    P: IntoIterator<Item = &'a ResolvedArtifact>,
    M: ModuleIdentity + ?Sized,
{
    present.into_iter().any(|artifact| {
        artifact.coords.group_id() == dependency.group()
            && artifact.coords.artifact_id() == dependency.name()
    })
}
