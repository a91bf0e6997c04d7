//! Module sources and aggregation
//!
//! A source enumerates candidate descriptors from one origin and can load
//! a handle for a descriptor it produced. `SourceSet` presents any number
//! of registered sources as one logical, eagerly queried enumeration.

pub mod manifest;
pub mod paths;

pub use manifest::ManifestSource;
pub use paths::PathListSource;

use std::fmt;
use tracing::warn;

use crate::descriptor::{ModuleDescriptor, ModuleHandle};
use crate::error::EngineError;

/// Capability of providing candidate modules from one origin
pub trait ModuleSource {
    /// Short human-readable name used in events and failure reports
    fn describe(&self) -> &str;

    /// Enumerate candidate descriptors
    fn enumerate(&self) -> Result<Vec<ModuleDescriptor>, EngineError>;

    /// Load a handle for a descriptor this source produced
    fn load(&self, descriptor: &ModuleDescriptor) -> Result<ModuleHandle, EngineError>;
}

/// A descriptor tagged with the source that produced it
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Index of the originating source within the `SourceSet`
    pub source: usize,
    /// The candidate module
    pub descriptor: ModuleDescriptor,
}

/// Enumeration failure of a single source; other sources proceed
#[derive(Debug)]
pub struct SourceFailure {
    /// The failing source's description
    pub source: String,
    /// What went wrong
    pub error: EngineError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// Ordered collection of sources treated as one logical enumeration
#[derive(Default)]
pub struct SourceSet {
    sources: Vec<Box<dyn ModuleSource>>,
}

impl SourceSet {
    /// Create an empty source set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source; enumeration follows registration order
    pub fn register(&mut self, source: Box<dyn ModuleSource>) {
        self.sources.push(source);
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are registered
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source at `index`, as produced in a `Candidate`
    pub fn get(&self, index: usize) -> Option<&dyn ModuleSource> {
        self.sources.get(index).map(|s| s.as_ref())
    }

    /// Query every source eagerly, in registration order
    ///
    /// Descriptors with duplicate names across sources are all kept; the
    /// engine does not assume names are globally unique. A failing source
    /// contributes zero descriptors and a recoverable failure entry.
    pub fn enumerate(&self) -> (Vec<Candidate>, Vec<SourceFailure>) {
        let mut candidates = Vec::new();
        let mut failures = Vec::new();

        for (index, source) in self.sources.iter().enumerate() {
            match source.enumerate() {
                Ok(descriptors) => {
                    candidates.extend(
                        descriptors
                            .into_iter()
                            .map(|descriptor| Candidate { source: index, descriptor }),
                    );
                }
                Err(error) => {
                    warn!("Source '{}' failed to enumerate: {}", source.describe(), error);
                    failures.push(SourceFailure {
                        source: source.describe().to_string(),
                        error,
                    });
                }
            }
        }

        (candidates, failures)
    }
}
