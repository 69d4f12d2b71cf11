//! Filesystem access for xdep
//!
//! Detects how a resolved artifact is laid out on disk and opens the
//! extension descriptor inside it, whether the artifact is an exploded
//! directory or an archive.

pub mod artifact;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod locate;

pub use artifact::ResolvedArtifact;
pub use config::load_config;
pub use constants::{DEFAULT_ARCHIVE_TYPES, DESCRIPTOR_PATH, MAX_DESCRIPTOR_SIZE};
pub use error::{Error, Result};
pub use layout::ArtifactLayout;
pub use locate::{DescriptorLocator, DescriptorStream};
