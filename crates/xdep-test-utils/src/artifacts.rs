//! [`TestArtifacts`] builder for descriptor lookup scenarios.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Path of the descriptor inside artifacts built by this crate.
pub const DESCRIPTOR_ENTRY: &str = "META-INF/quarkus-extension.properties";

const CLASS_BYTES: &[u8] = &[0xCA, 0xFE, 0xBA, 0xBE];

/// Render descriptor content from its three keys.
///
/// Keys passed as `None` are left out of the output.
pub fn descriptor(
    deployment: Option<&str>,
    conditional: Option<&str>,
    condition: Option<&str>,
) -> String {
    let mut out = String::from("# generated by xdep-test-utils\n");
    if let Some(value) = deployment {
        out.push_str(&format!("deployment-artifact={value}\n"));
    }
    if let Some(value) = conditional {
        out.push_str(&format!("conditional-dependencies={value}\n"));
    }
    if let Some(value) = condition {
        out.push_str(&format!("dependency-condition={value}\n"));
    }
    out
}

/// A temporary directory that holds artifacts created by a test.
///
/// # Example
///
/// ```rust,no_run
/// use xdep_test_utils::{TestArtifacts, descriptor};
///
/// let artifacts = TestArtifacts::new();
/// let content = descriptor(Some("g:a-deployment:1.0"), None, None);
/// let jar = artifacts.jar("a-1.0.jar", Some(&content));
/// let classes = artifacts.directory("a/classes", Some(&content));
/// assert!(jar.exists() && classes.exists());
/// ```
pub struct TestArtifacts {
    temp_dir: TempDir,
}

impl Default for TestArtifacts {
    fn default() -> Self {
        Self::new()
    }
}

impl TestArtifacts {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path under the root that is never created.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Create an exploded artifact directory at `name`.
    ///
    /// When `descriptor` is given it is written at [`DESCRIPTOR_ENTRY`].
    /// A class file is always written so the directory is not empty.
    pub fn directory(&self, name: &str, descriptor: Option<&str>) -> PathBuf {
        let dir = self.root().join(name);
        fs::create_dir_all(dir.join("org/acme")).unwrap();
        fs::write(dir.join("org/acme/Widget.class"), CLASS_BYTES).unwrap();
        if let Some(content) = descriptor {
            let path = dir.join(DESCRIPTOR_ENTRY);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    /// Create a jar archive at `name`.
    ///
    /// When `descriptor` is given it is stored at [`DESCRIPTOR_ENTRY`].
    pub fn jar(&self, name: &str, descriptor: Option<&str>) -> PathBuf {
        let mut entries: Vec<(&str, &[u8])> = vec![("org/acme/Widget.class", CLASS_BYTES)];
        if let Some(content) = descriptor {
            entries.push((DESCRIPTOR_ENTRY, content.as_bytes()));
        }
        self.archive(name, &entries)
    }

    /// Create a zip archive at `name` holding exactly `entries`.
    pub fn archive(&self, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default();
        writer.add_directory("META-INF/", options).unwrap();
        for (entry, content) in entries {
            writer.start_file(*entry, options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    /// Write an arbitrary file at `name`.
    pub fn file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
