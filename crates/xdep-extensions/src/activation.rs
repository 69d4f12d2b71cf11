//! Conditional dependency activation.
//!
//! Once the runtime artifacts of a build are known, each extension's
//! condition is checked. Satisfied extensions contribute the conditional
//! dependencies that the build does not already contain.

use std::collections::BTreeMap;

use serde::Serialize;
use xdep_coords::{ArtifactCoords, ArtifactKey, ModuleIdentity};

use crate::condition::PresentArtifacts;
use crate::descriptor::ExtensionDescriptor;

/// An extension whose condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activation<D> {
    pub extension: ArtifactCoords,
    /// Conditional dependencies to add, in declaration order.
    pub dependencies: Vec<D>,
}

/// An extension whose condition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub extension: ArtifactCoords,
    pub missing_keys: Vec<ArtifactKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationPlan<D> {
    pub activated: Vec<Activation<D>>,
    pub skipped: Vec<Skipped>,
}

impl<D> Default for ActivationPlan<D> {
    fn default() -> Self {
        Self {
            activated: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<D> ActivationPlan<D> {
    /// All dependencies to add across activated extensions.
    pub fn dependencies(&self) -> impl Iterator<Item = &D> {
        self.activated.iter().flat_map(|a| a.dependencies.iter())
    }
}

/// Decide which conditional dependencies to attach.
///
/// Extensions without conditional dependencies are left out of the plan.
/// A dependency already present by group and name is not added again.
pub fn plan_activation<D>(
    descriptors: &BTreeMap<ArtifactCoords, ExtensionDescriptor<D>>,
    present: &PresentArtifacts,
) -> ActivationPlan<D>
where
    D: ModuleIdentity + Clone,
{
    let mut plan = ActivationPlan::default();
    for descriptor in descriptors.values() {
        if descriptor.conditional_dependencies.is_empty() {
            continue;
        }

        if !descriptor.condition_satisfied(present) {
            let missing_keys = present
                .missing(&descriptor.required_keys)
                .into_iter()
                .cloned()
                .collect();
            tracing::debug!(extension = %descriptor.extension_id, "dependency condition not met");
            plan.skipped.push(Skipped {
                extension: descriptor.extension_id.clone(),
                missing_keys,
            });
            continue;
        }

        let dependencies = descriptor
            .conditional_dependencies
            .iter()
            .filter(|dep| !present.contains_module(*dep))
            .cloned()
            .collect();
        plan.activated.push(Activation {
            extension: descriptor.extension_id.clone(),
            dependencies,
        });
    }
    plan
}
