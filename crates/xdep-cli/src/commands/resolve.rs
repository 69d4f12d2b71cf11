//! `xdep resolve`: resolve descriptors and plan activation

use std::path::Path;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use xdep_coords::DependencyRequest;
use xdep_extensions::{
    ActivationPlan, ExtensionDescriptor, ExtensionResolver, PresentArtifacts, Resolution,
    ResolverConfig, plan_activation,
};
use xdep_fs::ResolvedArtifact;

use crate::error::{CliError, Result};

/// Runtime artifact list read from `--artifacts`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactList {
    #[serde(default)]
    pub artifacts: Vec<ResolvedArtifact>,
}

impl ArtifactList {
    /// Load the list and resolve relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut list: Self = xdep_fs::load_config(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for artifact in &mut list.artifacts {
            if artifact.path.is_relative() {
                artifact.path = base.join(&artifact.path);
            }
        }
        Ok(list)
    }
}

#[derive(Debug, Serialize)]
struct FailureReport {
    coords: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    extensions: Vec<&'a ExtensionDescriptor>,
    activation: &'a ActivationPlan<DependencyRequest>,
    failures: Vec<FailureReport>,
}

pub fn run_resolve(
    config: &ResolverConfig,
    artifacts: &Path,
    parallel: bool,
    json: bool,
) -> Result<()> {
    let list = ArtifactList::load(artifacts)?;
    tracing::debug!(count = list.artifacts.len(), "loaded runtime artifacts");

    let resolver = ExtensionResolver::new(config);
    let resolution: Resolution<DependencyRequest> = if parallel {
        resolver.resolve_all_parallel(&list.artifacts)
    } else {
        resolver.resolve_all(&list.artifacts)
    };
    let plan = plan_activation(
        &resolution.descriptors,
        &PresentArtifacts::new(&list.artifacts),
    );

    let report = ResolveReport {
        extensions: resolution.descriptors.values().collect(),
        activation: &plan,
        failures: resolution
            .failures
            .iter()
            .map(|f| FailureReport {
                coords: f.coords.to_string(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    match report.failures.len() {
        0 => Ok(()),
        n => Err(CliError::user(format!("{n} artifact(s) failed to resolve"))),
    }
}

fn render_report(report: &ResolveReport<'_>) -> String {
    let mut out = String::new();
    if report.extensions.is_empty() {
        out.push_str("No extensions found.\n");
    }
    for descriptor in &report.extensions {
        out.push_str(&super::inspect::render_descriptor(descriptor));
    }

    for activation in &report.activation.activated {
        for dependency in &activation.dependencies {
            out.push_str(&format!(
                "{} {} (from {})\n",
                "activate".cyan().bold(),
                dependency,
                activation.extension
            ));
        }
    }
    for skipped in &report.activation.skipped {
        let missing: Vec<String> = skipped.missing_keys.iter().map(ToString::to_string).collect();
        out.push_str(&format!(
            "{} {} (missing {})\n",
            "skip".yellow().bold(),
            skipped.extension,
            missing.join(" ")
        ));
    }
    for failure in &report.failures {
        out.push_str(&format!(
            "{} {}: {}\n",
            "failed".red().bold(),
            failure.coords,
            failure.error
        ));
    }
    out
}
