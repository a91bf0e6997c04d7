//! Host program identity and dependency manifest
//!
//! The engine takes the host program as an explicit value instead of an
//! ambient "current entry point" lookup. The host's declared dependencies
//! live in a `<host-stem>.modules.toml` manifest next to the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Library kind as declared in the host manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    /// First-party build output of the host project
    Project,
    /// Third-party package
    #[default]
    Package,
}

/// One dependency entry of the host manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestLibrary {
    /// Library name
    pub name: String,
    /// Library version (semantic versioning)
    pub version: String,
    /// First-party or third-party
    #[serde(default)]
    pub kind: LibraryKind,
    /// Whether a loadable artifact exists for this target
    #[serde(default = "default_true")]
    pub runtime: bool,
    /// Artifact path relative to the host binary's directory
    #[serde(default)]
    pub artifact: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Host dependency manifest (`*.modules.toml` structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostManifest {
    /// Declared dependencies
    #[serde(default, rename = "library")]
    pub libraries: Vec<ManifestLibrary>,
}

impl HostManifest {
    /// Load and validate a manifest file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::InvalidManifest(format!("Failed to read manifest file: {}", e))
        })?;

        let manifest: HostManifest = toml::from_str(&contents).map_err(|e| {
            EngineError::InvalidManifest(format!("Failed to parse manifest TOML: {}", e))
        })?;

        for library in &manifest.libraries {
            if !is_valid_name(&library.name) {
                return Err(EngineError::InvalidManifest(format!(
                    "Invalid library name: {} (must be alphanumeric with dashes/underscores/dots)",
                    library.name
                )));
            }
            if !is_valid_version(&library.version) {
                return Err(EngineError::InvalidManifest(format!(
                    "Invalid version format: {} (expected semantic versioning, for library: {})",
                    library.version, library.name
                )));
            }
        }

        Ok(manifest)
    }
}

/// Validate library name format
fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 64 {
        return false;
    }

    // Must start with alphanumeric
    if !name.chars().next().map_or(false, |c| c.is_alphanumeric()) {
        return false;
    }

    name.chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Validate version format (semantic versioning)
///
/// Accepts: major.minor[.patch][-prerelease][+build]
fn is_valid_version(version: &str) -> bool {
    if version.is_empty() {
        return false;
    }

    // Split on '+' to separate build metadata
    let base = version.split('+').next().unwrap_or(version);

    // Split on '-' to separate prerelease
    let version_part = base.split('-').next().unwrap_or(base);

    let nums: Vec<&str> = version_part.split('.').collect();

    // Must have 2-3 parts (major.minor or major.minor.patch)
    if nums.len() < 2 || nums.len() > 3 {
        return false;
    }

    nums.iter()
        .all(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// The designated host program
///
/// Passed explicitly into the engine so it has no implicit global
/// dependency and stays independently testable.
#[derive(Debug, Clone)]
pub struct HostProgram {
    binary: PathBuf,
}

impl HostProgram {
    /// Create a host program reference from its binary path
    pub fn new<P: AsRef<Path>>(binary: P) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    /// Path to the host binary
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Directory the host binary lives in
    pub fn dir(&self) -> &Path {
        self.binary.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Conventional manifest location next to the binary
    pub fn manifest_path(&self) -> PathBuf {
        self.binary.with_extension("modules.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.modules.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_manifest_with_defaults() {
        let (_dir, path) = write_manifest(
            r#"
            [[library]]
            name = "widgets"
            version = "1.4.2"
            kind = "project"
            artifact = "libwidgets.so"

            [[library]]
            name = "old-tool"
            version = "0.3.0"
            runtime = false
            "#,
        );

        let manifest = HostManifest::from_file(&path).unwrap();
        assert_eq!(manifest.libraries.len(), 2);

        let widgets = &manifest.libraries[0];
        assert_eq!(widgets.kind, LibraryKind::Project);
        assert!(widgets.runtime);
        assert_eq!(widgets.artifact.as_deref(), Some("libwidgets.so"));

        let old_tool = &manifest.libraries[1];
        assert_eq!(old_tool.kind, LibraryKind::Package);
        assert!(!old_tool.runtime);
        assert!(old_tool.artifact.is_none());
    }

    #[test]
    fn rejects_invalid_version() {
        let (_dir, path) = write_manifest(
            r#"
            [[library]]
            name = "widgets"
            version = "not-a-version"
            "#,
        );

        let err = HostManifest::from_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::InvalidManifest(_)));
    }

    #[test]
    fn rejects_invalid_name() {
        let (_dir, path) = write_manifest(
            r#"
            [[library]]
            name = "-bad"
            version = "1.0.0"
            "#,
        );

        let err = HostManifest::from_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::InvalidManifest(_)));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = HostManifest::from_file(dir.path().join("nope.modules.toml")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidManifest(_)));
    }

    #[test]
    fn manifest_path_sits_next_to_the_binary() {
        let host = HostProgram::new("/opt/app/server");
        assert_eq!(
            host.manifest_path(),
            PathBuf::from("/opt/app/server.modules.toml")
        );
        assert_eq!(host.dir(), Path::new("/opt/app"));
    }

    #[test]
    fn accepts_prerelease_and_build_versions() {
        assert!(is_valid_version("1.0.0"));
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.1.0-rc.1"));
        assert!(is_valid_version("2.1.0+build5"));
        assert!(!is_valid_version("1"));
        assert!(!is_valid_version("1.0.0.0"));
        assert!(!is_valid_version("a.b.c"));
    }
}
