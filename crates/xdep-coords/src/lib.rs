//! Artifact coordinates and keys.
//!
//! Provides the plain data model shared by the descriptor locator, the
//! descriptor parser and the condition evaluator: versioned coordinates,
//! version-less keys, and the `group:artifact:version` notation handed to a
//! build tool when it creates a dependency.

pub mod coords;
pub mod error;
pub mod key;
pub mod notation;

/// Type assigned to coordinates and keys that do not declare one.
pub const DEFAULT_TYPE: &str = "jar";

pub use coords::ArtifactCoords;
pub use error::{Error, Result};
pub use key::ArtifactKey;
pub use notation::{
    DependencyRequest, ModuleIdentity, as_capability_notation, as_dependency_notation,
    parse_dependency_condition, split_by_whitespace,
};
