//! Extension descriptor resolution for xdep.
//!
//! This crate reads the extension descriptor embedded in resolved
//! artifacts, evaluates dependency conditions against the artifacts present
//! in a build, and plans which conditional dependencies to activate.
//!
//! ```no_run
//! use xdep_extensions::{ExtensionResolver, PresentArtifacts, ResolverConfig, plan_activation};
//! # fn artifacts() -> Vec<xdep_fs::ResolvedArtifact> { Vec::new() }
//!
//! let runtime = artifacts();
//! let resolver = ExtensionResolver::new(&ResolverConfig::default());
//! let descriptors = resolver.resolve_all(&runtime).into_result().unwrap();
//! let plan = plan_activation(&descriptors, &PresentArtifacts::new(&runtime));
//! for dependency in plan.dependencies() {
//!     println!("add {dependency}");
//! }
//! ```

pub mod activation;
pub mod condition;
pub mod config;
pub mod declared;
pub mod descriptor;
pub mod error;
pub mod properties;
pub mod resolver;

pub use activation::{Activation, ActivationPlan, Skipped, plan_activation};
pub use condition::{PresentArtifacts, exists_by_name_only, satisfied};
pub use config::ResolverConfig;
pub use declared::{DeclaredDependency, copy_for_resolution, is_test_fixture_dependency};
pub use descriptor::{
    DependencyFactory, ExtensionDescriptor, PROP_CONDITIONAL_DEPENDENCIES,
    PROP_DEPENDENCY_CONDITION, PROP_DEPLOYMENT_ARTIFACT, RequestFactory, parse_descriptor,
};
pub use error::{Error, Result};
pub use resolver::{ExtensionResolver, Resolution, ResolveFailure};
