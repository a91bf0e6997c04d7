//! Resolved module set facade
//!
//! The externally visible collection handed to the build pipeline. The
//! first access runs the full enumeration/filter/resolution pass; every
//! later access serves the cached outcome for the lifetime of the engine
//! instance.

use std::sync::OnceLock;

use crate::resolve::{Resolution, ResolutionEngine, ResolutionFailure, ResolvedModule};
use crate::source::SourceFailure;

/// Read-only, lazily resolved collection of modules
///
/// Order is source-registration order, then within-source descriptor
/// order.
pub struct ModuleSet {
    engine: ResolutionEngine,
    resolution: OnceLock<Resolution>,
}

impl ModuleSet {
    /// Create a set over a resolution engine; nothing runs until first access
    pub fn new(engine: ResolutionEngine) -> Self {
        Self {
            engine,
            resolution: OnceLock::new(),
        }
    }

    fn resolution(&self) -> &Resolution {
        self.resolution.get_or_init(|| self.engine.resolve_all())
    }

    /// Resolved modules in reporting order
    pub fn modules(&self) -> &[ResolvedModule] {
        &self.resolution().modules
    }

    /// Enumeration failures of individual sources
    pub fn source_failures(&self) -> &[SourceFailure] {
        &self.resolution().source_failures
    }

    /// Admitted descriptors that could not be resolved
    pub fn resolution_failures(&self) -> &[ResolutionFailure] {
        &self.resolution().resolution_failures
    }

    /// Iterate resolved modules
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedModule> {
        self.modules().iter()
    }

    /// Number of resolved modules
    pub fn len(&self) -> usize {
        self.modules().len()
    }

    /// Whether no modules resolved
    pub fn is_empty(&self) -> bool {
        self.modules().is_empty()
    }
}

impl std::fmt::Debug for ModuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleSet")
            .field("resolved", &self.resolution.get().is_some())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ModuleSet {
    type Item = &'a ResolvedModule;
    type IntoIter = std::slice::Iter<'a, ResolvedModule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
