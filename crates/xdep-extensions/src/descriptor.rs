//! Extension descriptor model and parser.
//!
//! A descriptor is a properties file embedded in an extension artifact:
//!
//! ```properties
//! deployment-artifact=io.acme:widgets-deployment:1.0
//! conditional-dependencies=io.acme:widgets-rest:1.0 io.acme:widgets-db:1.0
//! dependency-condition=io.acme:rest-server
//! ```
//!
//! Only `deployment-artifact` is required.

use std::collections::BTreeSet;
use std::io::Read;

use serde::Serialize;
use xdep_coords::{
    ArtifactCoords, ArtifactKey, DependencyRequest, parse_dependency_condition,
    split_by_whitespace,
};

use crate::condition::PresentArtifacts;
use crate::error::{Error, Result};
use crate::properties::Properties;

/// Coordinates of the build-time companion module.
pub const PROP_DEPLOYMENT_ARTIFACT: &str = "deployment-artifact";
/// Whitespace-separated coordinates activated when the condition holds.
pub const PROP_CONDITIONAL_DEPENDENCIES: &str = "conditional-dependencies";
/// Whitespace-separated artifact keys that must all be present.
pub const PROP_DEPENDENCY_CONDITION: &str = "dependency-condition";

/// Turns a parsed conditional dependency into the caller's representation.
///
/// Any `Fn(DependencyRequest) -> D` is a factory.
pub trait DependencyFactory {
    type Dependency;

    fn create(&self, request: DependencyRequest) -> Self::Dependency;
}

impl<D, F> DependencyFactory for F
where
    F: Fn(DependencyRequest) -> D,
{
    type Dependency = D;

    fn create(&self, request: DependencyRequest) -> D {
        self(request)
    }
}

/// Factory that keeps conditional dependencies as [`DependencyRequest`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestFactory;

impl DependencyFactory for RequestFactory {
    type Dependency = DependencyRequest;

    fn create(&self, request: DependencyRequest) -> DependencyRequest {
        request
    }
}

/// Extension metadata read from an artifact's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionDescriptor<D = DependencyRequest> {
    /// Coordinates of the artifact carrying the descriptor.
    pub extension_id: ArtifactCoords,
    /// Coordinates of the companion deployment module.
    pub deployment: ArtifactCoords,
    /// Dependencies to add when `required_keys` are all present, in
    /// declaration order.
    pub conditional_dependencies: Vec<D>,
    /// Keys that must all be present; empty means unconditional.
    pub required_keys: BTreeSet<ArtifactKey>,
}

impl<D> ExtensionDescriptor<D> {
    /// Whether the conditional dependencies apply given `present`.
    pub fn condition_satisfied(&self, present: &PresentArtifacts) -> bool {
        present.satisfies(&self.required_keys)
    }

    /// Whether activation depends on other artifacts being present.
    pub fn is_conditional(&self) -> bool {
        !self.required_keys.is_empty()
    }
}

/// Parse descriptor content read from `reader`.
///
/// `extension_id` identifies the artifact the content came from and is
/// copied into the result and into any error.
pub fn parse_descriptor<R, F>(
    mut reader: R,
    extension_id: &ArtifactCoords,
    factory: &F,
) -> Result<ExtensionDescriptor<F::Dependency>>
where
    R: Read,
    F: DependencyFactory + ?Sized,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| Error::Read {
            extension: extension_id.clone(),
            source,
        })?;

    let props = Properties::parse(&text);
    if !props.duplicates().is_empty() {
        tracing::warn!(
            extension = %extension_id,
            keys = ?props.duplicates(),
            "descriptor repeats keys, keeping first values"
        );
    }

    let invalid = |key: &'static str| {
        move |source: xdep_coords::Error| Error::InvalidValue {
            extension: extension_id.clone(),
            key,
            source,
        }
    };

    let deployment = props
        .get(PROP_DEPLOYMENT_ARTIFACT)
        .ok_or_else(|| Error::MissingDeploymentCoords {
            extension: extension_id.clone(),
            key: PROP_DEPLOYMENT_ARTIFACT,
        })?;
    let deployment =
        ArtifactCoords::parse(deployment).map_err(invalid(PROP_DEPLOYMENT_ARTIFACT))?;

    let conditional_dependencies = match props.get(PROP_CONDITIONAL_DEPENDENCIES) {
        Some(value) => split_by_whitespace(value)
            .into_iter()
            .map(|token| {
                DependencyRequest::parse(token)
                    .map(|request| factory.create(request))
                    .map_err(invalid(PROP_CONDITIONAL_DEPENDENCIES))
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let required_keys = parse_dependency_condition(props.get(PROP_DEPENDENCY_CONDITION))
        .map_err(invalid(PROP_DEPENDENCY_CONDITION))?;

    Ok(ExtensionDescriptor {
        extension_id: extension_id.clone(),
        deployment,
        conditional_dependencies,
        required_keys,
    })
}
