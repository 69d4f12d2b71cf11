//! Extension resolution over a set of resolved artifacts.
//!
//! Each artifact is inspected on its own: the descriptor is located, parsed
//! and stored under the artifact's coordinates. Artifacts without a
//! descriptor produce no entry. Failures are collected per artifact so one
//! broken jar does not hide the rest of the batch; callers that want the
//! whole pass to fail use [`Resolution::into_result`] or
//! [`ResolverConfig::fail_fast`].

use std::collections::BTreeMap;

use xdep_coords::ArtifactCoords;
use xdep_fs::{DescriptorLocator, ResolvedArtifact};

use crate::config::ResolverConfig;
use crate::descriptor::{DependencyFactory, ExtensionDescriptor, RequestFactory, parse_descriptor};
use crate::error::{Error, Result};

/// An artifact whose descriptor could not be resolved.
#[derive(Debug)]
pub struct ResolveFailure {
    pub coords: ArtifactCoords,
    pub error: Error,
}

/// Outcome of resolving a batch of artifacts.
#[derive(Debug)]
pub struct Resolution<D> {
    /// Descriptors keyed by the coordinates of the artifact carrying them.
    pub descriptors: BTreeMap<ArtifactCoords, ExtensionDescriptor<D>>,
    /// Failures in input order.
    pub failures: Vec<ResolveFailure>,
}

impl<D> Default for Resolution<D> {
    fn default() -> Self {
        Self {
            descriptors: BTreeMap::new(),
            failures: Vec::new(),
        }
    }
}

impl<D> Resolution<D> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Descriptors, or the first failure if there was any.
    pub fn into_result(mut self) -> Result<BTreeMap<ArtifactCoords, ExtensionDescriptor<D>>> {
        if self.failures.is_empty() {
            Ok(self.descriptors)
        } else {
            Err(self.failures.swap_remove(0).error)
        }
    }

    /// Later artifacts with the same coordinates replace earlier ones.
    fn insert(&mut self, artifact: &ResolvedArtifact, descriptor: ExtensionDescriptor<D>) {
        if self
            .descriptors
            .insert(artifact.coords.clone(), descriptor)
            .is_some()
        {
            tracing::warn!(
                extension = %artifact.coords,
                path = %artifact.path().display(),
                "artifact coordinates resolved twice; keeping the later descriptor"
            );
        }
    }

    fn merge(&mut self, other: Resolution<D>) {
        for (coords, descriptor) in other.descriptors {
            if self.descriptors.insert(coords.clone(), descriptor).is_some() {
                tracing::warn!(
                    extension = %coords,
                    "artifact coordinates resolved twice; keeping the later descriptor"
                );
            }
        }
        self.failures.extend(other.failures);
    }
}

/// Locates and parses extension descriptors.
#[derive(Debug, Clone)]
pub struct ExtensionResolver<F = RequestFactory> {
    locator: DescriptorLocator,
    factory: F,
    fail_fast: bool,
    parallelism: usize,
}

impl Default for ExtensionResolver<RequestFactory> {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl ExtensionResolver<RequestFactory> {
    /// Resolver that keeps conditional dependencies as requests.
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_factory(config, RequestFactory)
    }
}

impl<F: DependencyFactory> ExtensionResolver<F> {
    /// Resolver that hands conditional dependencies to `factory`.
    pub fn with_factory(config: &ResolverConfig, factory: F) -> Self {
        Self {
            locator: config.locator(),
            factory,
            fail_fast: config.fail_fast,
            parallelism: config.parallelism.max(1),
        }
    }

    pub fn locator(&self) -> &DescriptorLocator {
        &self.locator
    }

    /// Resolve one artifact. `Ok(None)` means it is not an extension.
    pub fn resolve(
        &self,
        artifact: &ResolvedArtifact,
    ) -> Result<Option<ExtensionDescriptor<F::Dependency>>> {
        let stream = self
            .locator
            .locate(artifact)
            .map_err(|source| Error::Locate {
                coords: artifact.coords.clone(),
                source,
            })?;

        match stream {
            Some(stream) => {
                let descriptor = parse_descriptor(stream, &artifact.coords, &self.factory)?;
                tracing::debug!(
                    extension = %artifact.coords,
                    deployment = %descriptor.deployment,
                    conditional = descriptor.conditional_dependencies.len(),
                    "resolved extension descriptor"
                );
                Ok(Some(descriptor))
            }
            None => Ok(None),
        }
    }

    /// Resolve every artifact on the calling thread.
    pub fn resolve_all<'a, I>(&self, artifacts: I) -> Resolution<F::Dependency>
    where
        I: IntoIterator<Item = &'a ResolvedArtifact>,
    {
        let mut resolution = Resolution::default();
        for artifact in artifacts {
            match self.resolve(artifact) {
                Ok(Some(descriptor)) => {
                    resolution.insert(artifact, descriptor);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(artifact = %artifact.coords, %error, "failed to resolve extension");
                    resolution.failures.push(ResolveFailure {
                        coords: artifact.coords.clone(),
                        error,
                    });
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }
        resolution
    }

    /// Resolve artifacts across the configured number of threads.
    ///
    /// The slice is split into contiguous chunks; each thread fills its own
    /// [`Resolution`] and the results are merged in chunk order, so failures
    /// keep input order. With `fail_fast`, each thread stops at its first
    /// failure.
    pub fn resolve_all_parallel(&self, artifacts: &[ResolvedArtifact]) -> Resolution<F::Dependency>
    where
        F: Sync,
        F::Dependency: Send,
    {
        let threads = self.parallelism.min(artifacts.len());
        if threads <= 1 {
            return self.resolve_all(artifacts);
        }

        let chunk_size = artifacts.len().div_ceil(threads);
        let partials: Vec<Resolution<F::Dependency>> = std::thread::scope(|scope| {
            let handles: Vec<_> = artifacts
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || self.resolve_all(chunk)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(partial) => partial,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut resolution = Resolution::default();
        for partial in partials {
            resolution.merge(partial);
        }
        resolution
    }
}
