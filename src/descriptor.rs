//! Module descriptors and handles
//!
//! A descriptor is the identity of a candidate module as seen before
//! loading; a handle is the loadable artifact obtained once resolution
//! succeeds. The engine never links or executes the artifact itself.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a candidate module came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleOrigin {
    /// First-party build output of the host project
    Project,
    /// Third-party package from the host's dependency manifest
    Package,
    /// Explicitly supplied plugin binary path
    PluginPath,
}

/// Identity of a candidate module before loading
///
/// Immutable once produced by a source. Name comparisons are ASCII
/// case-insensitive throughout the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDescriptor {
    /// Module name (unique within its source, not across sources)
    pub name: String,
    /// Module version (semantic versioning)
    pub version: String,
    /// Originating source kind
    pub origin: ModuleOrigin,
    /// Whether the source exposes a loadable artifact for this target
    pub has_loadable_artifact: bool,
}

impl ModuleDescriptor {
    /// Create a new descriptor
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        origin: ModuleOrigin,
        has_loadable_artifact: bool,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            origin,
            has_loadable_artifact,
        }
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Loadable handle for a resolved module
///
/// A verified filesystem path handed to the downstream build pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleHandle {
    path: PathBuf,
}

impl ModuleHandle {
    /// Create a handle from a verified artifact path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the loadable artifact
    pub fn path(&self) -> &Path {
        &self.path
    }
}
