//! Shared-store fallback probing
//!
//! Locates a module artifact in the platform's shared module store when
//! the originating source cannot produce a handle directly. The host's
//! manifest can list a module satisfied by a system-wide install rather
//! than a copy adjacent to the application, so the manifest source alone
//! cannot always produce a handle. Store layout: `<base>/<version>/<file>`.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::EngineError;

#[cfg(windows)]
const PLATFORM_SHARE_DIR: &str = r"C:\Program Files\modsieve\shared";
#[cfg(not(windows))]
const PLATFORM_SHARE_DIR: &str = "/usr/local/share/modsieve/shared";

/// Probes shared-store base directories for module artifacts
pub struct SharedStoreProbe {
    base_dirs: Vec<PathBuf>,
}

impl SharedStoreProbe {
    /// Create a probe over the given base directories, tried in order
    pub fn new(base_dirs: Vec<PathBuf>) -> Self {
        Self { base_dirs }
    }

    /// Probe over the platform's conventional store location
    pub fn platform_default() -> Self {
        Self::new(Self::platform_default_dirs())
    }

    /// The platform's conventional store locations
    pub fn platform_default_dirs() -> Vec<PathBuf> {
        vec![PathBuf::from(PLATFORM_SHARE_DIR)]
    }

    /// Base directories this probe searches
    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    /// Locate an artifact for `name` at exactly `version`
    ///
    /// The first base directory containing a matching version
    /// subdirectory decides the outcome: a file miss inside it is final
    /// and later base directories are not consulted. Within the
    /// directory, the first file whose stem matches the name
    /// (case-insensitive) wins, in whatever order the OS yields entries.
    pub fn locate(&self, name: &str, version: &str) -> Result<PathBuf, EngineError> {
        for base in &self.base_dirs {
            let version_dir = base.join(version);
            if !version_dir.is_dir() {
                continue;
            }

            debug!("Probing {:?} for '{}'", version_dir, name);
            for entry in fs::read_dir(&version_dir)? {
                let path = entry?.path();
                if !path.is_file() {
                    continue;
                }
                let matches = path
                    .file_stem()
                    .map_or(false, |stem| stem.to_string_lossy().eq_ignore_ascii_case(name));
                if matches {
                    return Ok(path);
                }
            }

            return Err(EngineError::ModuleNotFound(format!(
                "No artifact for '{}' in {:?}",
                name, version_dir
            )));
        }

        Err(EngineError::ModuleNotFound(format!(
            "Version directory '{}' not present in any shared store location",
            version
        )))
    }
}
