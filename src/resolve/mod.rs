//! Module resolution engine
//!
//! Filters aggregated candidates and turns each admitted descriptor into
//! a loadable handle, falling back to shared-store probing when the
//! originating source misses.

pub mod probe;

pub use probe::SharedStoreProbe;

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::descriptor::{ModuleDescriptor, ModuleHandle};
use crate::error::EngineError;
use crate::rules::ModuleFilter;
use crate::source::{ModuleSource, SourceFailure, SourceSet};

/// A descriptor paired with its successfully obtained handle
///
/// Never partially populated: resolution either fully succeeds or the
/// descriptor is dropped with a reported failure.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedModule {
    /// The admitted descriptor
    pub descriptor: ModuleDescriptor,
    /// The loadable handle
    pub handle: ModuleHandle,
}

/// Per-descriptor resolution failure; the run continues without it
#[derive(Debug)]
pub struct ResolutionFailure {
    /// The admitted descriptor that could not be resolved
    pub descriptor: ModuleDescriptor,
    /// What went wrong
    pub error: EngineError,
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.descriptor, self.error)
    }
}

/// Outcome of one resolution pass
#[derive(Debug, Default)]
pub struct Resolution {
    /// Resolved modules in reporting order
    pub modules: Vec<ResolvedModule>,
    /// Sources that failed to enumerate
    pub source_failures: Vec<SourceFailure>,
    /// Admitted descriptors that could not be resolved
    pub resolution_failures: Vec<ResolutionFailure>,
}

/// Aggregates sources, filters candidates, and resolves survivors
pub struct ResolutionEngine {
    sources: SourceSet,
    filter: ModuleFilter,
    probe: SharedStoreProbe,
}

impl ResolutionEngine {
    /// Create an engine over registered sources, a frozen filter, and a probe
    pub fn new(sources: SourceSet, filter: ModuleFilter, probe: SharedStoreProbe) -> Self {
        Self {
            sources,
            filter,
            probe,
        }
    }

    /// Run one full enumeration/filter/resolution pass
    ///
    /// Reported order is deterministic: source-registration order, then
    /// descriptor order within a source. Recoverable failures are
    /// collected; they never abort the pass.
    pub fn resolve_all(&self) -> Resolution {
        let (candidates, source_failures) = self.sources.enumerate();
        let mut resolution = Resolution {
            source_failures,
            ..Default::default()
        };

        for candidate in candidates {
            let descriptor = candidate.descriptor;
            if !self.filter.admits(&descriptor) {
                continue;
            }
            info!("Admitted module {}", descriptor);

            let source = self
                .sources
                .get(candidate.source)
                .expect("candidate refers to a registered source");

            match self.resolve_one(source, &descriptor) {
                Ok(handle) => resolution.modules.push(ResolvedModule { descriptor, handle }),
                Err(error) => {
                    warn!("Resolution failed for {}: {}", descriptor, error);
                    resolution
                        .resolution_failures
                        .push(ResolutionFailure { descriptor, error });
                }
            }
        }

        resolution
    }

    fn resolve_one(
        &self,
        source: &dyn ModuleSource,
        descriptor: &ModuleDescriptor,
    ) -> Result<ModuleHandle, EngineError> {
        match source.load(descriptor) {
            Ok(handle) => Ok(handle),
            Err(direct) => {
                debug!(
                    "Direct resolution missed for {} ({}), probing shared store",
                    descriptor, direct
                );
                let path = self.probe.locate(&descriptor.name, &descriptor.version)?;
                Ok(ModuleHandle::new(path))
            }
        }
    }
}
