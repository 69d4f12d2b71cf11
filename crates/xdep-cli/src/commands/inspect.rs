//! `xdep inspect`: show one artifact's descriptor

use std::path::Path;

use colored::Colorize;
use xdep_coords::{ArtifactCoords, DEFAULT_TYPE};
use xdep_extensions::{ExtensionDescriptor, ExtensionResolver, ResolverConfig};
use xdep_fs::ResolvedArtifact;

use crate::error::Result;

const LOCAL_GROUP: &str = "local";
const LOCAL_VERSION: &str = "unspecified";

/// Coordinates for an artifact given only by path.
///
/// Directories are treated as jars; files use their extension as type.
pub fn derive_coords(path: &Path) -> ArtifactCoords {
    let name = if path.is_dir() {
        path.file_name()
    } else {
        path.file_stem()
    };
    let name = name
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "artifact".to_string());
    let artifact_type = if path.is_dir() {
        DEFAULT_TYPE.to_string()
    } else {
        path.extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TYPE.to_string())
    };
    ArtifactCoords::new(LOCAL_GROUP, name, None, artifact_type, LOCAL_VERSION)
}

pub fn run_inspect(
    config: &ResolverConfig,
    path: &Path,
    coords: Option<&str>,
    json: bool,
) -> Result<()> {
    let coords = match coords {
        Some(coords) => ArtifactCoords::parse(coords)?,
        None => derive_coords(path),
    };
    let artifact = ResolvedArtifact::new(coords, path);
    let descriptor = ExtensionResolver::new(config).resolve(&artifact)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    match descriptor {
        Some(descriptor) => print!("{}", render_descriptor(&descriptor)),
        None => println!(
            "{} {} is not an extension",
            "-".dimmed(),
            path.display()
        ),
    }
    Ok(())
}

/// Human-readable rendering of a descriptor.
pub fn render_descriptor(descriptor: &ExtensionDescriptor) -> String {
    let conditional = if descriptor.conditional_dependencies.is_empty() {
        "none".to_string()
    } else {
        descriptor
            .conditional_dependencies
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    let condition = if descriptor.required_keys.is_empty() {
        "unconditional".to_string()
    } else {
        descriptor
            .required_keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "{} {}\n  deployment:  {}\n  conditional: {}\n  condition:   {}\n",
        "extension".green().bold(),
        descriptor.extension_id,
        descriptor.deployment,
        conditional,
        condition
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use xdep_coords::{ArtifactKey, DependencyRequest};

    #[test]
    fn test_derive_coords_for_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("widgets-1.0.jar");
        std::fs::write(&jar, b"").unwrap();
        let classes = dir.path().join("classes");
        std::fs::create_dir(&classes).unwrap();

        assert_eq!(derive_coords(&jar).to_string(), "local:widgets-1.0:unspecified");
        assert_eq!(derive_coords(&classes).to_string(), "local:classes:unspecified");

        let pom = dir.path().join("bom.pom");
        std::fs::write(&pom, b"").unwrap();
        assert_eq!(derive_coords(&pom).artifact_type(), "pom");
    }

    #[test]
    fn test_render_descriptor() {
        colored::control::set_override(false);
        let descriptor = ExtensionDescriptor {
            extension_id: ArtifactCoords::jar("g", "a", "1.0"),
            deployment: ArtifactCoords::jar("g", "a-deployment", "1.0"),
            conditional_dependencies: vec![DependencyRequest::new("g", "b", "1.0")],
            required_keys: BTreeSet::from([ArtifactKey::of("g", "d")]),
        };
        let out = render_descriptor(&descriptor);
        assert!(out.starts_with("extension g:a:1.0\n"));
        assert!(out.contains("deployment:  g:a-deployment:1.0"));
        assert!(out.contains("conditional: g:b:1.0"));
        assert!(out.contains("condition:   g:d"));
    }
}
