//! Shared test utilities for the xdep workspace.
//!
//! This crate builds on-disk artifacts for tests: exploded directories and
//! jar archives, with or without an extension descriptor. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`artifacts`]: [`TestArtifacts`] builder rooted in a temporary directory

pub mod artifacts;

pub use artifacts::{DESCRIPTOR_ENTRY, TestArtifacts, descriptor};
