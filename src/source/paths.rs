//! Source for explicitly supplied plugin binary paths
//!
//! A version is not recoverable from a bare path, so entries are reported
//! as `0.0.0` and rely on direct path resolution rather than store probing.

use std::path::{Path, PathBuf};

use crate::descriptor::{ModuleDescriptor, ModuleHandle, ModuleOrigin};
use crate::error::EngineError;
use crate::source::ModuleSource;

/// Module source over an explicit list of plugin binary paths
pub struct PathListSource {
    paths: Vec<PathBuf>,
}

impl PathListSource {
    /// Create a source over the given paths
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn stem(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl ModuleSource for PathListSource {
    fn describe(&self) -> &str {
        "plugin path list"
    }

    fn enumerate(&self) -> Result<Vec<ModuleDescriptor>, EngineError> {
        Ok(self
            .paths
            .iter()
            .map(|path| {
                ModuleDescriptor::new(Self::stem(path), "0.0.0", ModuleOrigin::PluginPath, true)
            })
            .collect())
    }

    fn load(&self, descriptor: &ModuleDescriptor) -> Result<ModuleHandle, EngineError> {
        let path = self
            .paths
            .iter()
            .find(|path| descriptor.matches_name(&Self::stem(path)))
            .ok_or_else(|| {
                EngineError::ModuleNotFound(format!(
                    "{} is not in the plugin path list",
                    descriptor
                ))
            })?;

        if path.is_file() {
            Ok(ModuleHandle::new(path.clone()))
        } else {
            Err(EngineError::ModuleNotFound(format!(
                "Plugin binary {:?} does not exist",
                path
            )))
        }
    }
}
