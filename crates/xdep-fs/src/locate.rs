//! Descriptor lookup inside resolved artifacts.

use std::fs::{self, File};
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::constants::{DEFAULT_ARCHIVE_TYPES, DESCRIPTOR_PATH, MAX_DESCRIPTOR_SIZE};
use crate::{ArtifactLayout, Error, ResolvedArtifact, Result};

/// Readable descriptor content.
///
/// Directory descriptors are streamed from the file. Archive entries are
/// read in full while the archive is open, so the archive handle is already
/// closed when the stream is returned.
#[derive(Debug)]
pub struct DescriptorStream {
    origin: PathBuf,
    source: Source,
}

#[derive(Debug)]
enum Source {
    File(BufReader<File>),
    Entry(Cursor<Vec<u8>>),
}

impl DescriptorStream {
    /// Where the descriptor was found, for diagnostics.
    ///
    /// For archives this is `<archive>!/<entry>`.
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl Read for DescriptorStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            Source::File(reader) => reader.read(buf),
            Source::Entry(cursor) => cursor.read(buf),
        }
    }
}

/// Finds the extension descriptor of an artifact.
#[derive(Debug, Clone)]
pub struct DescriptorLocator {
    descriptor_path: String,
    archive_types: Vec<String>,
}

impl Default for DescriptorLocator {
    fn default() -> Self {
        Self::new(
            DESCRIPTOR_PATH,
            DEFAULT_ARCHIVE_TYPES.iter().map(|t| t.to_string()).collect(),
        )
    }
}

impl DescriptorLocator {
    /// Create a locator for a custom descriptor path and archive types.
    ///
    /// A leading `/` on the descriptor path is ignored.
    pub fn new(descriptor_path: impl Into<String>, archive_types: Vec<String>) -> Self {
        let descriptor_path: String = descriptor_path.into();
        Self {
            descriptor_path: descriptor_path.trim_start_matches('/').to_string(),
            archive_types,
        }
    }

    pub fn descriptor_path(&self) -> &str {
        &self.descriptor_path
    }

    pub fn archive_types(&self) -> &[String] {
        &self.archive_types
    }

    /// Locate the descriptor of a resolved artifact.
    pub fn locate(&self, artifact: &ResolvedArtifact) -> Result<Option<DescriptorStream>> {
        self.locate_path(artifact.path(), artifact.extension())
    }

    /// Locate the descriptor under `location`, a directory or a file of
    /// `declared_type`.
    ///
    /// Returns `Ok(None)` when the location does not exist, when it holds no
    /// descriptor, or when it is a file of a non-archive type. Failing to
    /// read a location that does exist is an error.
    pub fn locate_path(
        &self,
        location: &Path,
        declared_type: &str,
    ) -> Result<Option<DescriptorStream>> {
        match ArtifactLayout::detect(location, declared_type, &self.archive_types)? {
            ArtifactLayout::Missing => {
                tracing::debug!(path = %location.display(), "artifact location does not exist");
                Ok(None)
            }
            ArtifactLayout::Directory => self.locate_in_directory(location),
            ArtifactLayout::Archive => self.locate_in_archive(location),
            ArtifactLayout::Opaque => Ok(None),
        }
    }

    fn locate_in_directory(&self, dir: &Path) -> Result<Option<DescriptorStream>> {
        let descriptor = dir.join(&self.descriptor_path);
        match fs::metadata(&descriptor) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(&descriptor, e)),
        }

        let file = File::open(&descriptor).map_err(|e| Error::io(&descriptor, e))?;
        tracing::debug!(path = %descriptor.display(), "found descriptor in directory");
        Ok(Some(DescriptorStream {
            origin: descriptor,
            source: Source::File(BufReader::new(file)),
        }))
    }

    fn locate_in_archive(&self, archive_path: &Path) -> Result<Option<DescriptorStream>> {
        let file = File::open(archive_path).map_err(|e| Error::io(archive_path, e))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| Error::archive(archive_path, e))?;

        let content = match archive.by_name(&self.descriptor_path) {
            Ok(entry) => {
                let declared = entry.size();
                let too_large = || Error::DescriptorTooLarge {
                    path: archive_path.to_path_buf(),
                    declared,
                    limit: MAX_DESCRIPTOR_SIZE,
                };
                if declared > MAX_DESCRIPTOR_SIZE {
                    return Err(too_large());
                }

                // The header may lie; bound the read as well.
                let mut content = Vec::new();
                entry
                    .take(MAX_DESCRIPTOR_SIZE + 1)
                    .read_to_end(&mut content)
                    .map_err(|e| Error::io(archive_path, e))?;
                if content.len() as u64 > MAX_DESCRIPTOR_SIZE {
                    return Err(too_large());
                }
                content
            }
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(Error::archive(archive_path, e)),
        };

        let origin = PathBuf::from(format!(
            "{}!/{}",
            archive_path.display(),
            self.descriptor_path
        ));
        tracing::debug!(path = %origin.display(), "found descriptor in archive");
        Ok(Some(DescriptorStream {
            origin,
            source: Source::Entry(Cursor::new(content)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    fn read_all(mut stream: DescriptorStream) -> String {
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_directory_with_descriptor() {
        let dir = tempdir().unwrap();
        let meta = dir.path().join("META-INF");
        fs::create_dir_all(&meta).unwrap();
        fs::write(
            meta.join("quarkus-extension.properties"),
            "deployment-artifact=g:a-deployment:1.0\n",
        )
        .unwrap();

        let stream = DescriptorLocator::default()
            .locate_path(dir.path(), "jar")
            .unwrap()
            .expect("descriptor should be found");
        assert!(stream.origin().ends_with("META-INF/quarkus-extension.properties"));
        assert_eq!(read_all(stream), "deployment-artifact=g:a-deployment:1.0\n");
    }

    #[test]
    fn test_directory_without_descriptor() {
        let dir = tempdir().unwrap();
        let result = DescriptorLocator::default().locate_path(dir.path(), "jar");
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_custom_descriptor_path_strips_leading_slash() {
        let locator = DescriptorLocator::new("/ext.properties", vec!["jar".into()]);
        assert_eq!(locator.descriptor_path(), "ext.properties");

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ext.properties"), "k=v").unwrap();
        let stream = locator.locate_path(dir.path(), "jar").unwrap().unwrap();
        assert_eq!(read_all(stream), "k=v");
    }

    #[test]
    fn test_non_archive_file_is_absent() {
        let dir = tempdir().unwrap();
        let pom = dir.path().join("lib.pom");
        fs::write(&pom, "<project/>").unwrap();
        assert!(
            DescriptorLocator::default()
                .locate_path(&pom, "pom")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_corrupt_archive_is_an_error() {
        let dir = tempdir().unwrap();
        let jar = dir.path().join("broken.jar");
        fs::write(&jar, b"this is not a zip file").unwrap();

        let err = DescriptorLocator::default()
            .locate_path(&jar, "jar")
            .unwrap_err();
        assert!(matches!(err, Error::Archive { ref path, .. } if path == &jar));
    }
}
