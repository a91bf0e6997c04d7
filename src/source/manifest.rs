//! Default source backed by the host program's dependency manifest
//!
//! Provides candidate modules from the host's declared dependencies. Only
//! libraries exposing a loadable artifact for this target are provided;
//! build-time-only entries never reach filtering.

use tracing::info;

use crate::descriptor::{ModuleDescriptor, ModuleHandle, ModuleOrigin};
use crate::error::EngineError;
use crate::host::{HostManifest, HostProgram, LibraryKind};
use crate::source::ModuleSource;

/// Module source over the host dependency manifest
pub struct ManifestSource {
    host: HostProgram,
}

impl ManifestSource {
    /// Create a source for the given host program
    pub fn new(host: HostProgram) -> Self {
        Self { host }
    }

    fn read_manifest(&self) -> Result<HostManifest, EngineError> {
        HostManifest::from_file(self.host.manifest_path())
    }
}

impl ModuleSource for ManifestSource {
    fn describe(&self) -> &str {
        "host dependency manifest"
    }

    fn enumerate(&self) -> Result<Vec<ModuleDescriptor>, EngineError> {
        let manifest = self.read_manifest()?;

        let mut descriptors = Vec::new();
        for library in &manifest.libraries {
            if !library.runtime {
                continue;
            }
            info!("Providing '{}'", library.name);
            let origin = match library.kind {
                LibraryKind::Project => ModuleOrigin::Project,
                LibraryKind::Package => ModuleOrigin::Package,
            };
            descriptors.push(ModuleDescriptor::new(
                &library.name,
                &library.version,
                origin,
                true,
            ));
        }

        Ok(descriptors)
    }

    fn load(&self, descriptor: &ModuleDescriptor) -> Result<ModuleHandle, EngineError> {
        let manifest = self.read_manifest()?;

        let library = manifest
            .libraries
            .iter()
            .find(|l| descriptor.matches_name(&l.name) && l.version == descriptor.version)
            .ok_or_else(|| {
                EngineError::ModuleNotFound(format!(
                    "{} is not declared by the host manifest",
                    descriptor
                ))
            })?;

        let artifact = library.artifact.as_ref().ok_or_else(|| {
            EngineError::ModuleNotFound(format!("No artifact declared for {}", descriptor))
        })?;

        let path = self.host.dir().join(artifact);
        if path.is_file() {
            Ok(ModuleHandle::new(path))
        } else {
            Err(EngineError::ModuleNotFound(format!(
                "Artifact {:?} for {} does not exist",
                path, descriptor
            )))
        }
    }
}
