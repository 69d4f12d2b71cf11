//! Declared dependencies and the scratch copy used for resolution.
//!
//! Before resolving extension metadata the build tool copies the declared
//! dependencies of a configuration. Enforced platforms come first so
//! version alignment applies, and test-fixture variants are dropped.

use serde::{Deserialize, Serialize};
use xdep_coords::{DependencyRequest, ModuleIdentity};

/// Capability name suffix identifying a test-fixtures variant.
pub const TEST_FIXTURE_SUFFIX: &str = "-test-fixtures";

/// A dependency as declared in a build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    pub request: DependencyRequest,
    /// Capabilities explicitly requested for this dependency.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Whether this is an enforced platform (BOM).
    #[serde(default)]
    pub enforced_platform: bool,
}

impl DeclaredDependency {
    pub fn new(request: DependencyRequest) -> Self {
        Self {
            request,
            capabilities: Vec::new(),
            enforced_platform: false,
        }
    }

    pub fn is_test_fixture(&self) -> bool {
        is_test_fixture_dependency(&self.capabilities)
    }
}

impl ModuleIdentity for DeclaredDependency {
    fn group(&self) -> &str {
        &self.request.group
    }

    fn name(&self) -> &str {
        &self.request.artifact
    }
}

/// True when any requested capability names a test-fixtures variant.
pub fn is_test_fixture_dependency<S: AsRef<str>>(capabilities: &[S]) -> bool {
    capabilities
        .iter()
        .any(|c| c.as_ref().ends_with(TEST_FIXTURE_SUFFIX))
}

/// Copy declared dependencies for resolution scratch work.
///
/// Enforced platforms are placed first, then the remaining dependencies in
/// declaration order without test-fixture variants. Each platform appears
/// once.
pub fn copy_for_resolution(declared: &[DeclaredDependency]) -> Vec<DeclaredDependency> {
    let mut copy: Vec<DeclaredDependency> = Vec::with_capacity(declared.len());
    for platform in declared.iter().filter(|d| d.enforced_platform) {
        if !copy.contains(platform) {
            copy.push(platform.clone());
        }
    }
    copy.extend(
        declared
            .iter()
            .filter(|d| !d.enforced_platform && !d.is_test_fixture())
            .cloned(),
    );
    copy
}
