//! Shared fixtures for engine integration tests
//!
//! Provides an isolated host layout (binary stub, dependency manifest,
//! shared-store directories) backed by a temporary directory.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use modsieve::HostProgram;

/// Isolated host layout for one test
pub struct HostFixture {
    /// Temporary directory owning all test data
    pub temp_dir: TempDir,
    /// Directory the host binary lives in
    pub host_dir: PathBuf,
    /// Host binary stub path
    pub binary: PathBuf,
}

impl HostFixture {
    /// Create a fixture with a host binary stub
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let host_dir = temp_dir.path().join("app");
        fs::create_dir_all(&host_dir).unwrap();

        let binary = host_dir.join("app");
        fs::write(&binary, b"\x7fELF").unwrap();

        Self {
            temp_dir,
            host_dir,
            binary,
        }
    }

    /// The host program for this fixture
    pub fn host(&self) -> HostProgram {
        HostProgram::new(&self.binary)
    }

    /// Write the host manifest next to the binary
    pub fn write_manifest(&self, contents: &str) {
        fs::write(self.binary.with_extension("modules.toml"), contents).unwrap();
    }

    /// Create an artifact file in the host directory
    pub fn write_artifact(&self, name: &str) -> PathBuf {
        let path = self.host_dir.join(name);
        fs::write(&path, b"artifact").unwrap();
        path
    }

    /// Create `<base>/<version>/<file>` inside a shared-store layout
    pub fn write_store_artifact(&self, base: &str, version: &str, file: &str) -> PathBuf {
        let dir = self.temp_dir.path().join(base).join(version);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        fs::write(&path, b"artifact").unwrap();
        path
    }

    /// Create an empty `<base>/<version>/` store directory
    pub fn write_store_version_dir(&self, base: &str, version: &str) -> PathBuf {
        let dir = self.temp_dir.path().join(base).join(version);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Base path of a shared-store layout
    pub fn store_dir(&self, base: &str) -> PathBuf {
        self.temp_dir.path().join(base)
    }
}

impl Default for HostFixture {
    fn default() -> Self {
        Self::new()
    }
}
