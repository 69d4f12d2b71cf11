//! Well-known locations inside extension artifacts.

/// Relative path of the extension descriptor inside a directory or archive.
pub const DESCRIPTOR_PATH: &str = "META-INF/quarkus-extension.properties";

/// Declared artifact types that are opened as zip archives.
pub const DEFAULT_ARCHIVE_TYPES: &[&str] = &["jar"];

/// Largest descriptor read out of an archive, in bytes.
///
/// Entries declaring or yielding more are rejected as corrupt.
pub const MAX_DESCRIPTOR_SIZE: u64 = 1024 * 1024;
